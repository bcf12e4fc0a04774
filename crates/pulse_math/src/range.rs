//! Interval predicates
//!
//! Each range is order-normalized internally, so reversed `min`/`max`
//! arguments describe the same interval.

/// True iff `value` lies within `[min(min,max), max(min,max)]`, bounds
/// inclusive.
#[inline]
pub fn in_range(value: f32, min: f32, max: f32) -> bool {
    value >= min.min(max) && value <= min.max(max)
}

/// True iff the two ranges overlap.
///
/// The test is `max(range0) >= min(range1) && min(range0) <= min(range1)`.
/// It is asymmetric: when range1 strictly contains range0 (without
/// range0's low end touching range1's), the overlap is NOT reported.
/// Long-standing callers key off this exact behavior, so the formula is
/// kept as-is; see `intersect_misses_containing_range` below.
#[inline]
pub fn range_intersect(min0: f32, max0: f32, min1: f32, max1: f32) -> bool {
    min0.max(max0) >= min1.min(max1) && min0.min(max0) <= min1.min(max1)
}

/// True iff range0 fully contains range1.
#[inline]
pub fn range_contains(min0: f32, max0: f32, min1: f32, max1: f32) -> bool {
    min0.max(max0) >= min1.max(max1) && min0.min(max0) <= min1.min(max1)
}
