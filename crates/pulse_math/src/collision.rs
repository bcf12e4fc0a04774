//! Geometric collision predicates

use glam::Vec2;

/// True iff `point` lies strictly inside the circle at `center` with
/// `radius`. Boundary-exclusive: a point exactly on the circle does
/// not collide.
#[inline]
pub fn circle_point_collision(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}
