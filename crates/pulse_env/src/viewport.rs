//! Viewport size query
//!
//! Reads the environment-reported viewport and derives `vw`/`vh` (one
//! percent of width/height, the CSS viewport units). Two-branch
//! accessor strategy: prefer the inner size, fall back to the client
//! size on hosts that don't report one, and use a conservative default
//! when neither is available. No caching; every query re-reads.

use serde::{Deserialize, Serialize};

/// Size assumed when the environment reports nothing usable.
pub const DEFAULT_SIZE: (u32, u32) = (1280, 720);

/// Where viewport dimensions come from.
///
/// Accessors return `None` when the capability is unavailable, which
/// selects the next branch of [`Viewport::query`].
pub trait ViewportSource {
    /// Primary accessor: the environment's inner/render size.
    fn inner_size(&self) -> Option<(u32, u32)>;

    /// Compatibility fallback: the client size of the root surface.
    fn client_size(&self) -> Option<(u32, u32)>;
}

/// Snapshot of the viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// One percent of the width (CSS `1vw`).
    pub vw: f32,
    /// One percent of the height (CSS `1vh`).
    pub vh: f32,
}

impl Viewport {
    /// Query the current viewport from `source`.
    pub fn query(source: &dyn ViewportSource) -> Self {
        let (width, height) = if let Some(size) = source.inner_size() {
            size
        } else if let Some(size) = source.client_size() {
            tracing::debug!("inner size unavailable, using client size");
            size
        } else {
            tracing::debug!("no viewport source available, using default size");
            DEFAULT_SIZE
        };
        Self::from_size(width as f32, height as f32)
    }

    fn from_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            vw: width / 100.0,
            vh: height / 100.0,
        }
    }
}
