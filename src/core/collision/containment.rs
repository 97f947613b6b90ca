use crate::core::prelude::*;
use crate::warn_every_seconds;

/// Which side of the directed line `a -> b` the point `p` is on: positive to the left,
/// negative to the right, zero on the line.
pub fn side_of_line<T: Scalar>(a: Point2<T>, b: Point2<T>, p: Point2<T>) -> T {
    (b - a).cross(p - a)
}

/// Point-in-rectangle using the rectangle's own edge vectors, so it works after rotation.
///
/// With `A` top-left, `B` top-right and `D` bottom-left, the point is inside iff its projections
/// onto `AB` and `AD` both land within those edges. Edges are inclusive.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let square = Shape::rect(Vec2 { x: 0.5, y: 0.5 }, Vec2::one());
/// assert!(point_in_rect_by_dot(Vec2 { x: 0.5, y: 0.5 }, &square));
/// assert!(!point_in_rect_by_dot(Vec2 { x: 2.0, y: 2.0 }, &square));
/// ```
pub fn point_in_rect_by_dot<T: Scalar>(point: Point2<T>, rect: &Shape<T>) -> bool {
    if rect.is_degenerate() {
        return false;
    }
    let [d, a, b, _] = rect.vertices() else {
        warn_every_seconds!(
            WARN_THROTTLE_SECONDS,
            "point_in_rect_by_dot(): expected 4 vertices, got {}",
            rect.vertices().len()
        );
        return false;
    };
    let ap = point - *a;
    let ab = *b - *a;
    let ad = *d - *a;
    let along_ab = ap.dot(ab);
    let along_ad = ap.dot(ad);
    T::zero() <= along_ab
        && along_ab <= ab.dot(ab)
        && T::zero() <= along_ad
        && along_ad <= ad.dot(ad)
}

/// Point-in-convex-polygon by half-planes: inside iff the point is right of or on every edge.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let triangle = Shape::from_vertices(
///     Vec2::zero(),
///     vec![Vec2 { x: -1.0, y: 0.0 }, Vec2 { x: 0.0, y: 2.0 }, Vec2 { x: 1.0, y: 0.0 }],
/// );
/// assert!(point_in_convex_polygon(Vec2 { x: 0.0, y: 1.0 }, &triangle));
/// assert!(point_in_convex_polygon(Vec2 { x: 0.0, y: 0.0 }, &triangle));
/// assert!(!point_in_convex_polygon(Vec2 { x: 0.9, y: 1.0 }, &triangle));
/// ```
pub fn point_in_convex_polygon<T: Scalar>(point: Point2<T>, polygon: &impl Polygonal<T>) -> bool {
    !polygon.is_degenerate()
        && polygon
            .vertices()
            .iter()
            .circular_tuple_windows()
            .all(|(&a, &b)| side_of_line(a, b, point) <= T::zero())
}

/// Rectangle overlap built from [`point_in_rect_by_dot`]: some corner of either rectangle lies
/// in the other.
///
/// Like the half-plane test this misses two rectangles crossing without either holding a
/// corner of the other.
pub fn rects_overlap_by_dot<T: Scalar>(a: &Shape<T>, b: &Shape<T>) -> bool {
    b.vertices().iter().any(|&v| point_in_rect_by_dot(v, a))
        || a.vertices().iter().any(|&v| point_in_rect_by_dot(v, b))
}
