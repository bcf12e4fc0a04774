//! Pulse Math
//!
//! Stateless numeric and geometric helpers for the visualizer:
//! - Normalization, interpolation, and range remapping
//! - Interval predicates
//! - Seedable pseudo-random draws (scalars, vectors, colors)
//! - Circle/point collision
//!
//! Every function is pure and total over finite `f32` input. Degenerate
//! input (zero-width ranges and the like) propagates through IEEE-754
//! arithmetic to `inf`/`NaN` rather than returning a `Result`; callers
//! own the validity of their ranges.

pub mod collision;
pub mod color;
pub mod interp;
pub mod random;
pub mod range;

pub use glam;

pub use collision::circle_point_collision;
pub use color::Color;
pub use interp::{clamp, deg_to_rad, lerp, lerp2, map, norm, rad_to_deg};
pub use random::{
    random_int, random_range, random_rgb, random_rgb_opacity, random_rgba, random_vec,
    DeterministicRng, RandomSource,
};
pub use range::{in_range, range_contains, range_intersect};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
