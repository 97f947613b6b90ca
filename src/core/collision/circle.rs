use crate::core::prelude::*;

use serde::{Deserialize, Serialize};

/// Inclusive of the boundary; squared distances throughout, so no square roots.
pub fn point_in_circle<T: Scalar>(point: Point2<T>, circle: &Circle<T>) -> bool {
    !circle.is_degenerate() && point.dist_squared(circle.pivot) <= circle.radius * circle.radius
}

/// Whether `inner` lies entirely within `outer`, touching allowed.
///
/// The squared-slack test alone would accept a larger circle centred inside a smaller one, so
/// an `inner` with the larger radius is never contained.
pub fn circle_contained_in<T: Scalar>(inner: &Circle<T>, outer: &Circle<T>) -> bool {
    if inner.is_degenerate() || outer.is_degenerate() || inner.radius > outer.radius {
        return false;
    }
    let slack = outer.radius - inner.radius;
    inner.pivot.dist_squared(outer.pivot) <= slack * slack
}

/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let a = Circle::new(Vec2::zero(), 1.0);
/// assert!(circles_intersect(&a, &Circle::new(Vec2 { x: 1.5, y: 0.0 }, 1.0)));
/// assert!(!circles_intersect(&a, &Circle::new(Vec2 { x: 3.0, y: 0.0 }, 1.0)));
/// ```
pub fn circles_intersect<T: Scalar>(a: &Circle<T>, b: &Circle<T>) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }
    let reach = a.radius + b.radius;
    a.pivot.dist_squared(b.pivot) <= reach * reach
}

/// Every vertex of `rect` is in `circle`.
pub fn rect_fully_inside_circle<T: Scalar>(circle: &Circle<T>, rect: &impl Polygonal<T>) -> bool {
    !rect.is_degenerate()
        && rect
            .vertices()
            .into_iter()
            .all(|v| point_in_circle(v, circle))
}

/// Some vertex of `rect` is outside `circle`: the rectangle has at least partly left it.
pub fn rect_partly_outside_circle<T: Scalar>(
    circle: &Circle<T>,
    rect: &impl Polygonal<T>,
) -> bool {
    !rect.is_degenerate()
        && !circle.is_degenerate()
        && rect
            .vertices()
            .into_iter()
            .any(|v| !point_in_circle(v, circle))
}

/// Some vertex of `rect` is in `circle`.
pub fn rect_partly_inside_circle<T: Scalar>(
    circle: &Circle<T>,
    rect: &impl Polygonal<T>,
) -> bool {
    !rect.is_degenerate()
        && rect
            .vertices()
            .into_iter()
            .any(|v| point_in_circle(v, circle))
}

/// Whether the segment from `start` to `end` comes within `circle.radius` of its centre.
pub fn segment_intersects_circle<T: Scalar>(
    start: Point2<T>,
    end: Point2<T>,
    circle: &Circle<T>,
) -> bool {
    !circle.is_degenerate() && circle.pivot.dist_to_line(start, end) <= circle.radius
}

/// A ring-shaped track between two circles.
///
/// `inner` is normally concentric with and smaller than `outer`, but neither is required.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let track = Annulus::new(
///     Circle::new(Vec2::zero(), 10.0),
///     Circle::new(Vec2::zero(), 5.0),
/// );
/// assert!(track.contains_rect(&Shape::rect(Vec2 { x: 7.5, y: 0.0 }, Vec2::one())));
/// assert!(!track.contains_rect(&Shape::rect(Vec2 { x: 10.0, y: 0.0 }, Vec2::one())));
/// assert!(!track.contains_rect(&Shape::rect(Vec2::zero(), Vec2::one())));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annulus<T: Scalar = f32> {
    pub outer: Circle<T>,
    pub inner: Circle<T>,
}

impl<T: Scalar> Annulus<T> {
    pub fn new(outer: Circle<T>, inner: Circle<T>) -> Self {
        if inner.radius > outer.radius {
            warn!(
                "annulus inner radius {} exceeds outer radius {}",
                inner.radius, outer.radius
            );
        }
        Self { outer, inner }
    }

    /// In bounds iff no vertex has left the outer circle and not every vertex has fallen into
    /// the inner one. A rectangle straddling the inner edge still counts.
    pub fn contains_rect(&self, rect: &impl Polygonal<T>) -> bool {
        !rect.is_degenerate()
            && !self.outer.is_degenerate()
            && !rect_partly_outside_circle(&self.outer, rect)
            && !rect_fully_inside_circle(&self.inner, rect)
    }

    /// Like [`contains_rect`](Annulus::contains_rect), but any vertex inside the inner circle
    /// disqualifies the rectangle.
    pub fn contains_rect_strictly(&self, rect: &impl Polygonal<T>) -> bool {
        self.contains_rect(rect) && !rect_partly_inside_circle(&self.inner, rect)
    }

    /// The circle sits inside the outer circle without touching the inner one.
    pub fn contains_circle(&self, circle: &Circle<T>) -> bool {
        circle_contained_in(circle, &self.outer) && !circles_intersect(&self.inner, circle)
    }

    pub fn contains_point(&self, point: Point2<T>) -> bool {
        point_in_circle(point, &self.outer) && !point_in_circle(point, &self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, radius: f32) -> Circle {
        Circle::new(Vec2 { x, y }, radius)
    }

    #[test]
    fn point_in_circle_boundary() {
        let c = circle(0.0, 0.0, 1.0);
        assert!(point_in_circle(Vec2::zero(), &c));
        assert!(point_in_circle(Vec2 { x: 1.0, y: 0.0 }, &c));
        assert!(point_in_circle(Vec2 { x: 0.6, y: 0.8 }, &c));
        assert!(!point_in_circle(Vec2 { x: 0.8, y: 0.8 }, &c));
    }

    #[test]
    fn zero_radius_contains_nothing() {
        let c = circle(1.0, 1.0, 0.0);
        assert!(!point_in_circle(Vec2 { x: 1.0, y: 1.0 }, &c));
        assert!(!circles_intersect(&c, &circle(1.0, 1.0, 5.0)));
        assert!(!circle_contained_in(&c, &circle(1.0, 1.0, 5.0)));
        assert!(!segment_intersects_circle(Vec2::zero(), Vec2::splat(2.0), &c));
    }

    #[test]
    fn circles_intersect_scenarios() {
        let a = circle(0.0, 0.0, 1.0);
        assert!(circles_intersect(&a, &circle(1.5, 0.0, 1.0)));
        assert!(!circles_intersect(&a, &circle(3.0, 0.0, 1.0)));
        // Tangent circles touch.
        assert!(circles_intersect(&a, &circle(2.0, 0.0, 1.0)));
    }

    #[test]
    fn containment() {
        let outer = circle(0.0, 0.0, 5.0);
        assert!(circle_contained_in(&circle(1.0, 1.0, 1.0), &outer));
        assert!(circle_contained_in(&circle(4.0, 0.0, 1.0), &outer));
        assert!(!circle_contained_in(&circle(4.5, 0.0, 1.0), &outer));
        // The slack alone would pass here (2 <= 16), but a larger circle never fits.
        assert!(!circle_contained_in(&outer, &circle(1.0, 1.0, 1.0)));
        // Same size, same place: contained both ways.
        assert!(circle_contained_in(&outer, &outer));
    }

    #[test]
    fn containment_implies_intersection() {
        let circles = (0..6)
            .cartesian_product(0..4)
            .map(|(i, r)| circle(i as f32 * 0.9 - 2.0, (i % 3) as f32 * 0.4, 0.5 + r as f32 * 0.7))
            .collect_vec();
        for (a, b) in circles.iter().cartesian_product(circles.iter()) {
            if !circles_intersect(a, b) {
                assert!(!circle_contained_in(a, b), "{a:?} in {b:?}");
                assert!(!circle_contained_in(b, a), "{b:?} in {a:?}");
            }
        }
    }

    #[test]
    fn rect_against_circle() {
        let c = circle(0.0, 0.0, 2.0);
        let inside = Shape::rect(Vec2::zero(), Vec2::one());
        let straddling = Shape::rect(Vec2 { x: 2.0, y: 0.0 }, Vec2::one());
        let outside = Shape::rect(Vec2 { x: 5.0, y: 0.0 }, Vec2::one());

        assert!(rect_fully_inside_circle(&c, &inside));
        assert!(!rect_partly_outside_circle(&c, &inside));
        assert!(rect_partly_inside_circle(&c, &inside));

        assert!(!rect_fully_inside_circle(&c, &straddling));
        assert!(rect_partly_outside_circle(&c, &straddling));
        assert!(rect_partly_inside_circle(&c, &straddling));

        assert!(!rect_fully_inside_circle(&c, &outside));
        assert!(rect_partly_outside_circle(&c, &outside));
        assert!(!rect_partly_inside_circle(&c, &outside));

        let degenerate = Shape::rect(Vec2::zero(), Vec2::zero());
        assert!(!rect_fully_inside_circle(&c, &degenerate));
        assert!(!rect_partly_outside_circle(&c, &degenerate));
        assert!(!rect_partly_inside_circle(&c, &degenerate));
    }

    #[test]
    fn segments() {
        let c = circle(0.0, 0.0, 1.0);
        assert!(segment_intersects_circle(
            Vec2 { x: -5.0, y: 0.5 },
            Vec2 { x: 5.0, y: 0.5 },
            &c
        ));
        assert!(segment_intersects_circle(
            Vec2 { x: -5.0, y: 1.0 },
            Vec2 { x: 5.0, y: 1.0 },
            &c
        ));
        // The infinite line passes through the centre; the segment stops short.
        assert!(!segment_intersects_circle(
            Vec2 { x: 2.0, y: 0.0 },
            Vec2 { x: 5.0, y: 0.0 },
            &c
        ));
        assert!(segment_intersects_circle(Vec2::zero(), Vec2::zero(), &c));
    }

    #[test]
    fn annulus_rects() {
        let track = Annulus::new(circle(0.0, 0.0, 10.0), circle(0.0, 0.0, 5.0));
        let on_track = Shape::rect(Vec2 { x: 0.0, y: 7.5 }, Vec2::one());
        let across_outer = Shape::rect(Vec2 { x: 0.0, y: 10.0 }, Vec2::one());
        let in_hole = Shape::rect(Vec2 { x: 1.0, y: 1.0 }, Vec2::one());
        let across_inner = Shape::rect(Vec2 { x: 0.0, y: 5.0 }, Vec2::one());

        assert!(track.contains_rect(&on_track));
        assert!(!track.contains_rect(&across_outer));
        assert!(!track.contains_rect(&in_hole));
        assert!(track.contains_rect(&across_inner));

        assert!(track.contains_rect_strictly(&on_track));
        assert!(!track.contains_rect_strictly(&across_inner));
        assert!(!track.contains_rect(&Shape::rect(Vec2 { x: 7.5, y: 0.0 }, Vec2::zero())));
    }

    #[test]
    fn annulus_circles_and_points() {
        let track = Annulus::new(circle(0.0, 0.0, 10.0), circle(0.0, 0.0, 5.0));
        assert!(track.contains_circle(&circle(7.5, 0.0, 1.0)));
        assert!(!track.contains_circle(&circle(9.5, 0.0, 1.0)));
        assert!(!track.contains_circle(&circle(5.5, 0.0, 1.0)));
        assert!(track.contains_point(Vec2 { x: 0.0, y: -6.0 }));
        assert!(!track.contains_point(Vec2 { x: 0.0, y: -4.0 }));
        assert!(!track.contains_point(Vec2 { x: 0.0, y: -11.0 }));
    }
}
