use crate::core::prelude::*;

use serde::{Deserialize, Serialize};

/// Convex-convex overlap by vertex containment: some vertex of either shape lies inside (or
/// on) the other.
///
/// Cheap, but it misses two shapes that cross without either holding a vertex of the other,
/// such as a plus sign made of two thin rectangles. Use [`sat_overlap`] for an exact answer.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let a = Shape::rect(Vec2::zero(), Vec2::splat(2.0));
/// assert!(shapes_overlap(&a, &Shape::rect(Vec2::one(), Vec2::one())));
/// assert!(!shapes_overlap(&a, &Shape::rect(Vec2::splat(3.0), Vec2::one())));
/// ```
pub fn shapes_overlap<T: Scalar>(a: &impl Polygonal<T>, b: &impl Polygonal<T>) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }
    b.vertices()
        .into_iter()
        .any(|v| point_in_convex_polygon(v, a))
        || a.vertices()
            .into_iter()
            .any(|v| point_in_convex_polygon(v, b))
}

/// A track bounded by two open polylines, with no closing segment at either end.
///
/// Travelling along `outer` the track is on the right; travelling along `inner` it is on the
/// left. A shape is on the track iff every one of its vertices is right of or on every `outer`
/// segment, and for at least one `inner` segment every vertex is strictly left of it.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// // A straight corridor between y = 0 and y = 4, running left to right.
/// let corridor = Corridor::new(
///     vec![Vec2 { x: 0.0, y: 4.0 }, Vec2 { x: 10.0, y: 4.0 }],
///     vec![Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 10.0, y: 0.0 }],
/// ).unwrap();
/// assert!(corridor.contains(&Shape::rect(Vec2 { x: 5.0, y: 2.0 }, Vec2::one())));
/// assert!(!corridor.contains(&Shape::rect(Vec2 { x: 5.0, y: 4.0 }, Vec2::one())));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Corridor<T: Scalar = f32> {
    outer: Vec<Point2<T>>,
    inner: Vec<Point2<T>>,
}

impl<T: Scalar> Corridor<T> {
    pub fn new(outer: Vec<Point2<T>>, inner: Vec<Point2<T>>) -> Result<Self> {
        if outer.len() < 2 || inner.len() < 2 {
            bail!(
                "corridor walls need at least 2 points each, got outer={} inner={}",
                outer.len(),
                inner.len()
            );
        }
        Ok(Self { outer, inner })
    }

    /// Splits `markers` in half, outer wall first, the way a scene lists them.
    pub fn from_markers(markers: &[Point2<T>]) -> Result<Self> {
        if markers.len() % 2 != 0 {
            bail!("corridor needs an even number of markers, got {}", markers.len());
        }
        let (outer, inner) = markers.split_at(markers.len() / 2);
        Self::new(outer.to_vec(), inner.to_vec())
            .with_context(|| format!("while splitting {} markers", markers.len()))
    }

    pub fn outer(&self) -> &[Point2<T>] {
        &self.outer
    }
    pub fn inner(&self) -> &[Point2<T>] {
        &self.inner
    }

    pub fn contains(&self, shape: &impl Polygonal<T>) -> bool {
        if shape.is_degenerate() {
            return false;
        }
        let vertices = shape.vertices();
        let within_outer = self.outer.iter().tuple_windows().all(|(&a, &b)| {
            vertices
                .iter()
                .all(|&v| side_of_line(a, b, v) <= T::zero())
        });
        within_outer
            && self.inner.iter().tuple_windows().any(|(&a, &b)| {
                vertices
                    .iter()
                    .all(|&v| side_of_line(a, b, v) > T::zero())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thin_bars() -> (Shape, Shape) {
        (
            Shape::rect(Vec2::zero(), Vec2 { x: 6.0, y: 1.0 }),
            Shape::rect(Vec2::zero(), Vec2 { x: 1.0, y: 6.0 }),
        )
    }

    #[test]
    fn overlap_by_contained_vertex() {
        let a = Shape::rect(Vec2::zero(), Vec2::splat(2.0));
        let corner_inside = Shape::rect(Vec2 { x: 1.4, y: 1.4 }, Vec2::one());
        assert!(shapes_overlap(&a, &corner_inside));
        assert!(shapes_overlap(&corner_inside, &a));
        let nested = Shape::rect(Vec2::zero(), Vec2::splat(0.5));
        assert!(shapes_overlap(&a, &nested));
        assert!(shapes_overlap(&nested, &a));
    }

    #[test]
    fn touching_counts() {
        let a = Shape::rect(Vec2::zero(), Vec2::splat(2.0));
        assert!(shapes_overlap(&a, &Shape::rect(Vec2 { x: 2.0, y: 0.0 }, Vec2::splat(2.0))));
    }

    #[test]
    fn misses_crossing_without_vertices() {
        let (horizontal, vertical) = thin_bars();
        assert!(!shapes_overlap(&horizontal, &vertical));
        assert!(sat_overlap(&horizontal, &vertical));
    }

    #[test]
    fn works_with_trapezoids() {
        let trapezoid = Shape::polygon(
            &Transform::with_centre(Vec2 { x: 0.0, y: 0.0 }),
            &[
                Vec2 { x: -3.0, y: -1.0 },
                Vec2 { x: -1.0, y: 1.0 },
                Vec2 { x: 1.0, y: 1.0 },
                Vec2 { x: 3.0, y: -1.0 },
            ],
        )
        .unwrap();
        // Inside the bounding box but beyond the slanted edge.
        let in_corner = Shape::rect(Vec2 { x: -2.7, y: 0.7 }, Vec2::splat(0.4));
        assert!(!shapes_overlap(&trapezoid, &in_corner));
        assert!(aabb_overlap(&trapezoid, &in_corner));
        let on_base = Shape::rect(Vec2 { x: 2.0, y: -1.0 }, Vec2::splat(0.4));
        assert!(shapes_overlap(&trapezoid, &on_base));
    }

    #[test]
    fn degenerate_never_overlaps() {
        let a = Shape::rect(Vec2::zero(), Vec2::splat(2.0));
        let point = Shape::rect(Vec2::zero(), Vec2::zero());
        assert!(!shapes_overlap(&a, &point));
        assert!(!shapes_overlap(&point, &a));
    }

    fn bent_corridor() -> Corridor {
        // An L-shaped track: along the x-axis, then up x = 10 with the hole at top-left.
        Corridor::from_markers(&[
            Vec2 { x: 10.0, y: 10.0 },
            Vec2 { x: 10.0, y: 0.0 },
            Vec2 { x: 0.0, y: 0.0 },
            Vec2 { x: 6.0, y: 10.0 },
            Vec2 { x: 6.0, y: 4.0 },
            Vec2 { x: 0.0, y: 4.0 },
        ])
        .unwrap()
    }

    #[test]
    fn corridor_contains() {
        let corridor = bent_corridor();
        assert_eq!(corridor.outer().len(), 3);
        assert_eq!(corridor.inner().len(), 3);
        assert!(corridor.contains(&Shape::rect(Vec2 { x: 3.0, y: 2.0 }, Vec2::one())));
        assert!(corridor.contains(&Shape::rect(Vec2 { x: 8.0, y: 8.0 }, Vec2::one())));
        assert!(corridor.contains(&Shape::rect(Vec2 { x: 8.0, y: 2.0 }, Vec2::one())));
        // Crossing the outer wall.
        assert!(!corridor.contains(&Shape::rect(Vec2 { x: 3.0, y: 0.0 }, Vec2::one())));
        assert!(!corridor.contains(&Shape::rect(Vec2 { x: 10.0, y: 5.0 }, Vec2::one())));
        // In the hole beyond the inner wall.
        assert!(!corridor.contains(&Shape::rect(Vec2 { x: 3.0, y: 5.0 }, Vec2::one())));
        // Straddling the inner wall.
        assert!(!corridor.contains(&Shape::rect(Vec2 { x: 3.0, y: 4.0 }, Vec2::one())));
        // On an outer wall counts as inside.
        assert!(corridor.contains(&Shape::rect(Vec2 { x: 3.0, y: 0.5 }, Vec2::one())));
        assert!(!corridor.contains(&Shape::rect(Vec2 { x: 3.0, y: 2.0 }, Vec2::zero())));
    }

    #[test]
    fn corridors_compare_by_walls() {
        assert_eq!(bent_corridor(), bent_corridor());
        let mut markers = bent_corridor().outer().to_vec();
        markers.extend(bent_corridor().inner().iter().map(|&v| v + Vec2::one()));
        assert_ne!(Corridor::from_markers(&markers).unwrap(), bent_corridor());

        let a = Shape::<f64>::rect(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert_eq!(a, a.clone());
        assert_ne!(a, a.translated(Point2::new(0.5, 0.0)));
    }

    #[test]
    fn corridor_rejects_short_walls() {
        assert!(Corridor::new(vec![Vec2::zero()], vec![Vec2::zero(), Vec2::one()]).is_err());
        assert!(Corridor::from_markers(&[Vec2::zero(), Vec2::one(), Vec2::up()]).is_err());
        assert!(Corridor::from_markers(&[Vec2::zero(), Vec2::one()]).is_err());
    }
}
