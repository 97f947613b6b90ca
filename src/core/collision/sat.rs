use crate::core::prelude::*;

use crate::util::gg_range;

/// Finds an edge normal of either polygon on which their projections do not meet.
///
/// Returns `None` if there is no such axis, which for convex polygons means they intersect.
/// Zero-length edges have no normal and are skipped; short edges still count, however small.
/// Projections that only touch do not separate.
pub fn separating_axis<T: Scalar>(
    a: &impl Polygonal<T>,
    b: &impl Polygonal<T>,
) -> Option<Point2<T>> {
    a.normals()
        .into_iter()
        .chain(b.normals())
        .filter(|axis| axis.len_squared() > T::zero())
        .find(|&axis| gg_range::is_separated(&a.project(axis), &b.project(axis)))
}

/// Exact overlap test for two convex polygons by the separating axis theorem.
///
/// Both polygons' edge normals are candidate axes; checking only one shape's would miss
/// separations along the other's edges.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let square = Shape::rect(Vec2::one(), Vec2::splat(2.0));
/// assert!(sat_overlap(&square, &square.translated(Vec2 { x: 1.0, y: 0.0 })));
/// assert!(!sat_overlap(&square, &square.translated(Vec2 { x: 3.0, y: 0.0 })));
/// ```
pub fn sat_overlap<T: Scalar>(a: &impl Polygonal<T>, b: &impl Polygonal<T>) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }
    separating_axis(a, b).is_none()
}
