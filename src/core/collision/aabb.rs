use crate::core::prelude::*;

use crate::util::gg_range;

/// Axis-aligned box overlap by interval comparison on each axis.
///
/// Touching edges do not count as overlap; identical boxes do. Rotated shapes are compared by
/// the bounds of their vertices, which over-approximates them.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let a = Shape::rect(Vec2::zero(), Vec2::one());
/// assert!(aabb_overlap(&a, &Shape::rect(Vec2 { x: 0.5, y: 0.5 }, Vec2::one())));
/// assert!(!aabb_overlap(&a, &Shape::rect(Vec2 { x: 1.0, y: 0.0 }, Vec2::one())));
/// ```
pub fn aabb_overlap<T: Scalar>(a: &Shape<T>, b: &Shape<T>) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }
    if a.is_rotated() || b.is_rotated() {
        debug!("aabb_overlap() on rotated shape, using vertex bounds");
    }
    let (ax, ay) = a.bounds();
    let (bx, by) = b.bounds();
    gg_range::overlaps_strictly(&ax, &bx) && gg_range::overlaps_strictly(&ay, &by)
}

/// Point-in-box by comparing against the edges; inclusive on every edge.
pub fn point_in_aabb<T: Scalar>(point: Point2<T>, shape: &Shape<T>) -> bool {
    !shape.is_degenerate() && shape.contains_point(point)
}
