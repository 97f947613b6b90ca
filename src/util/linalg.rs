#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use crate::util::gg_float::Scalar;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A point (or vector) in the plane.
///
/// All shape vertices and pivots are [`Point2`] values. The coordinate system is y-up: "top" is
/// the larger y value and positive rotations are anticlockwise.
///
/// [`Point2`] is generic over any [`Scalar`]; [`Vec2`] is the `f32` specialisation used by
/// default.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality
/// Two points are considered equal if their components differ by less than
/// [`Scalar::tolerance()`]. For `f32` that is [`EPSILON`](crate::core::config::EPSILON).
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Point2<T = f32> {
    pub x: T,
    pub y: T,
}

pub type Vec2 = Point2<f32>;

impl<T: Scalar> PartialEq for Point2<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < T::tolerance() && (self.y - other.y).abs() < T::tolerance()
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}

impl<T: Scalar> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }
    /// Returns a unit vector pointing upward (positive y-axis).
    #[must_use]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }
    /// Returns a unit vector pointing downward (negative y-axis).
    #[must_use]
    pub fn down() -> Self {
        Self::new(T::zero(), -T::one())
    }
    #[must_use]
    pub fn one() -> Self {
        Self::splat(T::one())
    }
    #[must_use]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }
    #[must_use]
    pub fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Point2::len) when comparing lengths to avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> T {
        self.dot(*self)
    }

    #[must_use]
    pub fn len(&self) -> T {
        self.len_squared().sqrt()
    }

    /// Returns a unit vector in the same direction as this vector.
    ///
    /// A zero-length vector is returned unchanged (as positive zero) rather than divided by zero.
    #[must_use]
    pub fn normed(&self) -> Self {
        let len = self.len();
        let mut rv = if len.is_zero() { Self::zero() } else { *self / len };
        rv.x = gg_float::force_positive_zero(rv.x);
        rv.y = gg_float::force_positive_zero(rv.y);
        rv
    }

    /// Returns a new vector rotated anticlockwise about the origin by the given angle in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// use hitplane::core::prelude::*;
    /// let rotated = Vec2::right().rotated(std::f32::consts::FRAC_PI_2);
    /// assert!(rotated.almost_eq(Vec2::up()));
    /// ```
    #[must_use]
    pub fn rotated(&self, radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    /// Rotates this point about `pivot`. The pivot itself is a fixed point of the rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hitplane::core::prelude::*;
    /// let pivot = Vec2 { x: 1.0, y: 1.0 };
    /// let p = Vec2 { x: 2.0, y: 1.0 };
    /// assert!(p.rotated_about(pivot, std::f32::consts::PI).almost_eq(Vec2 { x: 0.0, y: 1.0 }));
    /// assert!(pivot.rotated_about(pivot, 1.234).almost_eq(pivot));
    /// ```
    #[must_use]
    pub fn rotated_about(&self, pivot: Self, radians: T) -> Self {
        (*self - pivot).rotated(radians) + pivot
    }

    /// Returns the perpendicular obtained by rotating a quarter turn clockwise, `(y, -x)`.
    #[must_use]
    pub fn orthog(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns the left-hand perpendicular `(-y, x)`, a quarter turn anticlockwise.
    ///
    /// For an edge of a clockwise polygon this points out of the polygon.
    #[must_use]
    pub fn left_normal(&self) -> Self {
        -self.orthog()
    }

    #[must_use]
    pub fn component_wise(&self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use hitplane::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.dot(v2), 23.0);
    /// ```
    #[must_use]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Computes the z-component of the 3D cross product of the two vectors embedded in the
    /// plane z = 0.
    ///
    /// Positive when `other` lies anticlockwise of `self` (to its left), negative when clockwise,
    /// zero when they are parallel.
    ///
    /// # Examples
    ///
    /// ```
    /// use hitplane::core::prelude::*;
    /// assert_eq!(Vec2::right().cross(Vec2::up()), 1.0);
    /// assert_eq!(Vec2::up().cross(Vec2::right()), -1.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }

    #[must_use]
    pub fn dist_squared(&self, other: Self) -> T {
        (*self - other).len_squared()
    }

    /// Calculates the shortest distance from this point to the segment from `start` to `end`.
    ///
    /// The projection of the point onto the line is clamped to the segment; if `start` and `end`
    /// coincide this is the distance to that point.
    ///
    /// # Examples
    ///
    /// ```
    /// use hitplane::core::prelude::*;
    /// let point = Vec2 { x: 0.0, y: 1.0 };
    /// assert_eq!(point.dist_to_line(Vec2 { x: -1.0, y: 0.0 }, Vec2 { x: 1.0, y: 0.0 }), 1.0);
    /// assert_eq!(point.dist_to_line(Vec2 { x: 3.0, y: 1.0 }, Vec2 { x: 5.0, y: 1.0 }), 3.0);
    /// ```
    #[must_use]
    pub fn dist_to_line(&self, start: Self, end: Self) -> T {
        if start == end {
            return self.dist(start);
        }
        let dx = end - start;
        let t = ((*self - start).dot(dx) / dx.len_squared())
            .max(T::zero())
            .min(T::one());
        self.dist(start + dx * t)
    }

    /// Checks if the vector is approximately equal to another vector, that is, if the length of
    /// their difference is less than [`Scalar::tolerance()`].
    pub fn almost_eq(&self, rhs: Self) -> bool {
        (*self - rhs).len() < T::tolerance()
    }
}

impl<T: Scalar> Zero for Point2<T> {
    fn zero() -> Self {
        Point2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from(value: [T; 2]) -> Self {
        let [x, y] = value;
        Point2 { x, y }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from(value: (T, T)) -> Self {
        Point2 {
            x: value.0,
            y: value.1,
        }
    }
}

impl<T> From<Point2<T>> for [T; 2] {
    fn from(value: Point2<T>) -> Self {
        [value.x, value.y]
    }
}

impl<T: Scalar> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl<T: Scalar> Add<Point2<T>> for Point2<T> {
    type Output = Point2<T>;

    fn add(self, rhs: Point2<T>) -> Self::Output {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> AddAssign<Point2<T>> for Point2<T> {
    fn add_assign(&mut self, rhs: Point2<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub<Point2<T>> for Point2<T> {
    type Output = Point2<T>;

    fn sub(self, rhs: Point2<T>) -> Self::Output {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> SubAssign<Point2<T>> for Point2<T> {
    fn sub_assign(&mut self, rhs: Point2<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<T> for Point2<T> {
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Mul<Point2<f64>> for f64 {
    type Output = Point2<f64>;

    fn mul(self, rhs: Point2<f64>) -> Self::Output {
        rhs * self
    }
}

impl<T: Scalar> MulAssign<T> for Point2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Div<T> for Point2<T> {
    type Output = Point2<T>;

    fn div(self, rhs: T) -> Self::Output {
        Point2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T: Scalar> DivAssign<T> for Point2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> Neg for Point2<T> {
    type Output = Point2<T>;

    fn neg(self) -> Self::Output {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A trait for objects that have a rectangular boundary aligned with the coordinate axes.
///
/// Provides the extent (total width/height) and centre, plus derived edges. The coordinate
/// system is y-up, so [`top()`](AxisAlignedExtent::top) is the larger y value.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let rect = Shape::rect(Vec2 { x: 1.0, y: 1.0 }, Vec2 { x: 2.0, y: 4.0 });
/// assert_eq!(rect.left(), 0.0);
/// assert_eq!(rect.right(), 2.0);
/// assert_eq!(rect.top(), 3.0);
/// assert_eq!(rect.bottom(), -1.0);
/// assert!(rect.contains_point(Vec2 { x: 2.0, y: 0.0 }));
/// ```
pub trait AxisAlignedExtent<T: Scalar = f32> {
    fn extent(&self) -> Point2<T>;
    fn centre(&self) -> Point2<T>;

    fn half_widths(&self) -> Point2<T> {
        self.extent() * T::half()
    }
    fn bottom_left(&self) -> Point2<T> {
        self.centre() - self.half_widths()
    }
    fn top_right(&self) -> Point2<T> {
        self.centre() + self.half_widths()
    }

    fn left(&self) -> T {
        self.bottom_left().x
    }
    fn right(&self) -> T {
        self.top_right().x
    }
    fn top(&self) -> T {
        self.top_right().y
    }
    fn bottom(&self) -> T {
        self.bottom_left().y
    }

    /// Inclusive on every edge.
    fn contains_point(&self, pos: Point2<T>) -> bool {
        self.left() <= pos.x && pos.x <= self.right() && self.bottom() <= pos.y && pos.y <= self.top()
    }
}

/// Position, rotation about z (radians, anticlockwise) and scale of an object in the plane.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let parent = Transform {
///     centre: Vec2 { x: 10.0, y: 0.0 },
///     rotation: 0.0,
///     scale: Vec2 { x: 2.0, y: 3.0 },
/// };
/// let child = Transform::with_centre(Vec2 { x: 1.0, y: 1.0 }).within(&parent);
/// assert_eq!(child.centre, Vec2 { x: 12.0, y: 3.0 });
/// assert_eq!(child.scale, Vec2 { x: 2.0, y: 3.0 });
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform<T: Scalar = f32> {
    pub centre: Point2<T>,
    pub rotation: T,
    pub scale: Point2<T>,
}

impl<T: Scalar> Transform<T> {
    #[must_use]
    pub fn with_centre(centre: Point2<T>) -> Self {
        Self {
            centre,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn translated(&self, by: Point2<T>) -> Self {
        Self {
            centre: self.centre + by,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Projects this transform, given relative to `parent`, into the parent's space.
    ///
    /// The centre is scaled by the parent's scale then offset by the parent's centre, and the
    /// scales multiply. The hierarchy is one level deep and the parent's rotation is not applied.
    #[must_use]
    pub fn within(&self, parent: &Transform<T>) -> Self {
        Self {
            centre: parent.centre + self.centre.component_wise(parent.scale),
            rotation: self.rotation,
            scale: self.scale.component_wise(parent.scale),
        }
    }

    /// Maps a point in this transform's local space (scale, then offset) without rotating it.
    #[must_use]
    pub fn apply_unrotated(&self, local: Point2<T>) -> Point2<T> {
        local.component_wise(self.scale) + self.centre
    }
}

impl<T: Scalar> Default for Transform<T> {
    fn default() -> Self {
        Self {
            centre: Point2::zero(),
            rotation: T::zero(),
            scale: Point2::one(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

    // ==================== Point2 Basic Operations ====================

    #[test]
    fn vec2_scalar_multiplication() {
        let a = Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(a * 2.0, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(2.0 * a, Vec2 { x: 2.0, y: 2.0 });
    }

    #[test]
    fn vec2_subtraction_and_addition() {
        let a = Vec2 { x: 5.0, y: 6.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a - b, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(a + b, Vec2 { x: 8.0, y: 10.0 });
    }

    #[test]
    fn vec2_assign_ops() {
        let mut a = Vec2 { x: 1.0, y: 2.0 };
        a += Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a, Vec2 { x: 4.0, y: 6.0 });
        a -= Vec2 { x: 1.0, y: 2.0 };
        assert_eq!(a, Vec2 { x: 3.0, y: 4.0 });
        a *= 2.0;
        assert_eq!(a, Vec2 { x: 6.0, y: 8.0 });
        a /= 4.0;
        assert_eq!(a, Vec2 { x: 1.5, y: 2.0 });
    }

    #[test]
    fn vec2_negation() {
        assert_eq!(-Vec2 { x: 1.0, y: -2.0 }, Vec2 { x: -1.0, y: 2.0 });
    }

    #[test]
    fn vec2_cardinal_directions() {
        assert_eq!(Vec2::right(), Vec2 { x: 1.0, y: 0.0 });
        assert_eq!(Vec2::left(), Vec2 { x: -1.0, y: 0.0 });
        assert_eq!(Vec2::up(), Vec2 { x: 0.0, y: 1.0 });
        assert_eq!(Vec2::down(), Vec2 { x: 0.0, y: -1.0 });
    }

    #[test]
    fn vec2_display() {
        let v = Vec2 { x: 1.5, y: -2.0 };
        assert_eq!(format!("{v}"), "vec(1.5, -2)");
        assert_eq!(format!("{v:.2}"), "vec(1.50, -2.00)");
    }

    #[test]
    fn vec2_equality_is_tolerant() {
        let a = Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(a, Vec2 { x: 1.0 + EPSILON / 2.0, y: 1.0 });
        assert_ne!(a, Vec2 { x: 1.0 + EPSILON * 2.0, y: 1.0 });
    }

    #[test]
    fn vec2_len_and_normed() {
        let v = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(v.len_squared(), 25.0);
        assert_eq!(v.len(), 5.0);
        assert_eq!(v.normed(), Vec2 { x: 0.6, y: 0.8 });
        assert_eq!(Vec2::zero().normed(), Vec2::zero());
    }

    #[test]
    fn vec2_cross_sign_convention() {
        // Clockwise turn is negative.
        let edge = Vec2 { x: 0.0, y: 1.0 };
        assert!(edge.cross(Vec2 { x: 1.0, y: 0.5 }) < 0.0);
        assert!(edge.cross(Vec2 { x: -1.0, y: 0.5 }) > 0.0);
        assert_eq!(edge.cross(Vec2 { x: 0.0, y: 3.0 }), 0.0);
    }

    #[test]
    fn vec2_normals_are_perpendicular() {
        let v = Vec2 { x: 3.0, y: 2.0 };
        assert_eq!(v.orthog(), Vec2 { x: 2.0, y: -3.0 });
        assert_eq!(v.left_normal(), Vec2 { x: -2.0, y: 3.0 });
        assert_eq!(v.dot(v.orthog()), 0.0);
        assert_eq!(v.dot(v.left_normal()), 0.0);
    }

    #[test]
    fn vec2_rotation() {
        let v = Vec2::right();
        assert!(v.rotated(FRAC_PI_2).almost_eq(Vec2::up()));
        assert!(v.rotated(PI).almost_eq(Vec2::left()));
        assert!(v.rotated(-FRAC_PI_2).almost_eq(Vec2::down()));
        assert!(Vec2::one()
            .rotated(FRAC_PI_4)
            .almost_eq(Vec2 { x: 0.0, y: SQRT_2 }));
    }

    #[test]
    fn vec2_rotation_about_pivot_matches_formula() {
        let pivot = Vec2 { x: 2.0, y: -1.0 };
        let p = Vec2 { x: 3.5, y: 0.5 };
        let theta = 0.7_f32;
        let expected = Vec2 {
            x: (p.x - pivot.x) * theta.cos() - (p.y - pivot.y) * theta.sin() + pivot.x,
            y: (p.x - pivot.x) * theta.sin() + (p.y - pivot.y) * theta.cos() + pivot.y,
        };
        assert!(p.rotated_about(pivot, theta).almost_eq(expected));
        assert!(pivot.rotated_about(pivot, theta).almost_eq(pivot));
    }

    #[test]
    fn vec2_component_wise() {
        let a = Vec2 { x: 8.0, y: 15.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.component_wise(b), Vec2 { x: 32.0, y: 75.0 });
    }

    #[test]
    fn vec2_dist_to_line_clamps() {
        let start = Vec2 { x: 0.0, y: 0.0 };
        let end = Vec2 { x: 2.0, y: 0.0 };
        assert_eq!(Vec2 { x: 1.0, y: 1.0 }.dist_to_line(start, end), 1.0);
        assert_eq!(Vec2 { x: -3.0, y: 0.0 }.dist_to_line(start, end), 3.0);
        assert_eq!(Vec2 { x: 5.0, y: 4.0 }.dist_to_line(end, end), 5.0);
    }

    #[test]
    fn f64_points() {
        let a = Point2::<f64>::new(1.0, 2.0);
        let b = 2.0 * a;
        assert_eq!(b, Point2::new(2.0, 4.0));
        assert_eq!(a.cross(b), 0.0);
        assert_eq!(Point2::from([3.0_f64, 4.0]).len(), 5.0);
    }

    // ==================== Transform ====================

    #[test]
    fn transform_defaults() {
        let t = Transform::<f32>::default();
        assert_eq!(t.centre, Vec2::zero());
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.scale, Vec2::one());
    }

    #[test]
    fn transform_within_parent_ignores_parent_rotation() {
        let parent = Transform {
            centre: Vec2 { x: 1.0, y: 2.0 },
            rotation: 1.0,
            scale: Vec2 { x: 2.0, y: 0.5 },
        };
        let child = Transform {
            centre: Vec2 { x: 3.0, y: 4.0 },
            rotation: 0.25,
            scale: Vec2 { x: 3.0, y: 3.0 },
        };
        let projected = child.within(&parent);
        assert_eq!(projected.centre, Vec2 { x: 7.0, y: 4.0 });
        assert_eq!(projected.scale, Vec2 { x: 6.0, y: 1.5 });
        assert_eq!(projected.rotation, 0.25);
    }

    #[test]
    fn transform_equality_uses_point_tolerance() {
        let t = Transform::with_centre(Vec2 { x: 1.0, y: 2.0 });
        assert_eq!(t, Transform::with_centre(Vec2 { x: 1.0 + EPSILON / 2.0, y: 2.0 }));
        assert_ne!(t, t.translated(Vec2::one()));
        let precise = Transform::<f64>::with_centre(Point2::new(1.0, 2.0));
        assert_eq!(precise, precise.translated(Point2::new(1e-12, 0.0)));
        assert_ne!(precise, precise.translated(Point2::new(1e-6, 0.0)));
    }

    #[test]
    fn transform_apply_unrotated() {
        let t = Transform {
            centre: Vec2 { x: 10.0, y: 10.0 },
            rotation: FRAC_PI_2,
            scale: Vec2 { x: 2.0, y: 3.0 },
        };
        assert_eq!(
            t.apply_unrotated(Vec2 { x: 1.0, y: -1.0 }),
            Vec2 { x: 12.0, y: 7.0 }
        );
    }
}
