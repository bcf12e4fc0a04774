//! Pulse environment queries
//!
//! Facts the host platform reports and the visualizer adapts to.
//! Currently: the viewport size, with CSS-style `vw`/`vh` units
//! derived per query. Falls back to conservative defaults when the
//! platform reports nothing usable.

pub mod viewport;
pub mod window;

pub use viewport::{Viewport, ViewportSource};
