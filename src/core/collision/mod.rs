use crate::core::prelude::*;

use crate::util::gg_range;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

pub mod aabb;
pub mod circle;
pub mod containment;
pub mod gjk;
pub mod half_plane;
pub mod sat;

pub(crate) mod polygon {
    use crate::core::prelude::*;
    use crate::util::{gg_float, gg_range};
    use std::ops::Range;

    /// Left-hand perpendicular of every edge, wrapping last to first. Not normalised; a
    /// zero-length edge yields a zero normal.
    pub fn normals_of<T: Scalar>(vertices: &[Point2<T>]) -> Vec<Point2<T>> {
        if vertices.is_empty() {
            warn!("asked for normals of empty vertex set");
            return Vec::new();
        }
        vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&u, &v)| (v - u).left_normal())
            .collect()
    }

    /// Shoelace formula. Negative for clockwise winding in a y-up frame.
    pub fn signed_area<T: Scalar>(vertices: &[Point2<T>]) -> T {
        if vertices.len() < 3 {
            return T::zero();
        }
        vertices
            .iter()
            .circular_tuple_windows()
            .fold(T::zero(), |acc, (&u, &v)| acc + u.cross(v))
            * T::half()
    }

    pub fn is_clockwise<T: Scalar>(vertices: &[Point2<T>]) -> bool {
        signed_area(vertices) < T::zero()
    }

    /// Collinear corners are allowed; any two turns of opposite sense are not. Turns are
    /// measured between unit edge directions, so the result does not depend on scale.
    pub fn is_convex<T: Scalar>(vertices: &[Point2<T>]) -> bool {
        vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&u, &v, &w)| (v - u).normed().cross((w - v).normed()))
            .filter(|turn| !gg_float::almost_zero(*turn))
            .map(gg_float::sign_zero)
            .all_equal()
    }

    /// Fewer than 3 vertices, or an area negligible next to the bounding box. Relative to the
    /// extent so that millimetre-scale shapes are not rejected.
    pub fn is_degenerate<T: Scalar>(vertices: &[Point2<T>]) -> bool {
        if vertices.len() < 3 {
            return true;
        }
        let extent = extent_of(vertices);
        signed_area(vertices).abs() <= T::tolerance() * extent.x * extent.y
    }

    pub fn bounds_of<T: Scalar>(vertices: &[Point2<T>]) -> Option<(Range<T>, Range<T>)> {
        Some((
            gg_range::spanning(vertices.iter().map(|v| v.x))?,
            gg_range::spanning(vertices.iter().map(|v| v.y))?,
        ))
    }

    pub fn extent_of<T: Scalar>(vertices: &[Point2<T>]) -> Point2<T> {
        bounds_of(vertices).map_or(Point2::zero(), |(xs, ys)| {
            Point2::new(xs.end - xs.start, ys.end - ys.start)
        })
    }
}

/// A convex polygon with clockwise winding.
///
/// Every vertex-based algorithm in [`collision`](crate::core::collision) takes `impl Polygonal`.
/// Only [`vertices()`](Polygonal::vertices) and [`pivot()`](Polygonal::pivot) are required.
pub trait Polygonal<T: Scalar = f32> {
    fn vertices(&self) -> Vec<Point2<T>>;
    fn pivot(&self) -> Point2<T>;

    /// The outward (left-hand) normal of each edge `P[i] -> P[i+1]`, unnormalised.
    fn normals(&self) -> Vec<Point2<T>> {
        polygon::normals_of(&self.vertices())
    }

    /// Fewer than 3 vertices, or no area to speak of. Every predicate treats a degenerate shape
    /// as containing nothing and overlapping nothing.
    fn is_degenerate(&self) -> bool {
        polygon::is_degenerate(&self.vertices())
    }

    /// Scalar projection of every vertex onto `axis`, as `min..max`.
    ///
    /// `axis` need not be a unit vector but must be non-zero; an empty polygon projects to the
    /// empty range `0..0`.
    fn project(&self, axis: Point2<T>) -> Range<T> {
        let len = axis.len();
        gg_range::spanning(self.vertices().into_iter().map(|v| v.dot(axis) / len))
            .unwrap_or(T::zero()..T::zero())
    }

    /// The vertex furthest in `direction`. Ties go to the earliest vertex. An empty polygon
    /// supports at its pivot.
    fn support(&self, direction: Point2<T>) -> Point2<T> {
        self.vertices()
            .into_iter()
            .rev()
            .max_by(|a, b| {
                a.dot(direction)
                    .partial_cmp(&b.dot(direction))
                    .unwrap_or(Ordering::Equal)
            })
            .unwrap_or_else(|| self.pivot())
    }
}

impl<T: Scalar, P: Polygonal<T>> Polygonal<T> for &P {
    fn vertices(&self) -> Vec<Point2<T>> {
        (*self).vertices()
    }

    fn pivot(&self) -> Point2<T> {
        (*self).pivot()
    }

    fn normals(&self) -> Vec<Point2<T>> {
        (*self).normals()
    }

    fn is_degenerate(&self) -> bool {
        (*self).is_degenerate()
    }
}

/// The family of collision algorithms, with the evaluation cadence each one tolerates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Aabb,
    LeftRight,
    PointInRect,
    Circle,
    Corridor,
    Sat,
    Gjk,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Aabb,
        Algorithm::LeftRight,
        Algorithm::PointInRect,
        Algorithm::Circle,
        Algorithm::Corridor,
        Algorithm::Sat,
        Algorithm::Gjk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Aabb => "aabb",
            Algorithm::LeftRight => "left-right",
            Algorithm::PointInRect => "point-in-rect",
            Algorithm::Circle => "circle",
            Algorithm::Corridor => "corridor",
            Algorithm::Sat => "sat",
            Algorithm::Gjk => "gjk",
        }
    }

    /// Everything is cheap enough to recompute whenever an input changes, except GJK, which is
    /// iterative and only ever polled.
    pub fn cadence(self) -> Cadence {
        match self {
            Algorithm::Gjk => Cadence::Every(DEFAULT_GJK_POLL_INTERVAL),
            _ => Cadence::OnChange,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| {
                anyhow!(
                    "unknown algorithm {s:?}, expected one of: {}",
                    Algorithm::ALL.iter().map(|a| a.name()).join(", ")
                )
            })
    }
}
