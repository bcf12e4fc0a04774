//! Normalization, interpolation, and range remapping

use glam::Vec2;

/// Where `value` falls fractionally between `min` and `max`.
///
/// `norm(5.0, 0.0, 10.0) == 0.5`. A zero-width range (`min == max`)
/// divides by zero and yields `inf`/`NaN`.
#[inline]
pub fn norm(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Value at fraction `t` between `min` and `max`.
///
/// `t` outside `[0, 1]` extrapolates; the result is deliberately not
/// clamped.
#[inline]
pub fn lerp(t: f32, min: f32, max: f32) -> f32 {
    (max - min) * t + min
}

/// Componentwise [`lerp`] between two points.
#[inline]
pub fn lerp2(t: f32, p0: Vec2, p1: Vec2) -> Vec2 {
    Vec2::new(lerp(t, p0.x, p1.x), lerp(t, p0.y, p1.y))
}

/// Rescale `value` from the source range into the destination range.
///
/// Composes [`norm`] and [`lerp`], so it inherits their extrapolation
/// and degenerate-range behavior.
#[inline]
pub fn map(value: f32, source_min: f32, source_max: f32, dest_min: f32, dest_max: f32) -> f32 {
    lerp(norm(value, source_min, source_max), dest_min, dest_max)
}

/// Restrict `value` to the interval spanned by `min` and `max`.
///
/// Tolerant of reversed bounds: `clamp(v, 10.0, 0.0)` clamps to
/// `[0, 10]`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min.min(max)).min(min.max(max))
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees / 180.0 * std::f32::consts::PI
}

/// Radians to degrees. Inverse of [`deg_to_rad`] up to rounding.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}
