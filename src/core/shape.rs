use crate::core::collision::polygon;
use crate::core::prelude::*;

use crate::util::gg_float;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A sized, positioned object in the plane, as a host scene would describe it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane<T: Scalar = f32> {
    pub transform: Transform<T>,
    /// Unscaled width and height.
    pub size: Point2<T>,
}

impl<T: Scalar> Plane<T> {
    pub fn new(centre: Point2<T>, size: Point2<T>) -> Self {
        Self {
            transform: Transform::with_centre(centre),
            size,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: T) -> Self {
        self.transform.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Point2<T>) -> Self {
        self.transform.scale = scale;
        self
    }

    #[must_use]
    pub fn translated(mut self, by: Point2<T>) -> Self {
        self.transform = self.transform.translated(by);
        self
    }

    /// The transform and folded size (`size * scale * parent.scale`) after projecting into
    /// `parent`'s space.
    pub fn projected(&self, parent: Option<&Plane<T>>) -> (Transform<T>, Point2<T>) {
        let transform = match parent {
            Some(parent) => self.transform.within(&parent.transform),
            None => self.transform,
        };
        (transform, self.size.component_wise(transform.scale))
    }
}

/// Builds the [`Shape`] of a [`Plane`]: four corners, clockwise from bottom-left.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let parent = Plane::new(Vec2 { x: 10.0, y: 0.0 }, Vec2::one()).with_scale(Vec2::splat(2.0));
/// let child = Plane::new(Vec2 { x: 1.0, y: 0.0 }, Vec2::one());
/// let shape = ShapeBuilder::new(&child).with_parent(&parent).build();
/// assert_eq!(shape.pivot(), Vec2 { x: 12.0, y: 0.0 });
/// assert_eq!(shape.size(), Vec2 { x: 2.0, y: 2.0 });
/// assert_eq!(shape.vertices()[0], Vec2 { x: 11.0, y: -1.0 });
/// ```
#[derive(Clone, Debug)]
pub struct ShapeBuilder<'a, T: Scalar = f32> {
    plane: &'a Plane<T>,
    parent: Option<&'a Plane<T>>,
    rotate: bool,
}

impl<'a, T: Scalar> ShapeBuilder<'a, T> {
    pub fn new(plane: &'a Plane<T>) -> Self {
        Self {
            plane,
            parent: None,
            rotate: false,
        }
    }

    /// Only the parent's centre and scale are used.
    #[must_use]
    pub fn with_parent(mut self, parent: &'a Plane<T>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Rotate the corners about the pivot by the plane's own rotation.
    #[must_use]
    pub fn rotated(mut self) -> Self {
        self.rotate = true;
        self
    }

    pub fn build(&self) -> Shape<T> {
        let (transform, size) = self.plane.projected(self.parent);
        let pivot = transform.centre;
        let half = size * T::half();
        let mut vertices = vec![
            pivot + Point2::new(-half.x, -half.y),
            pivot + Point2::new(-half.x, half.y),
            pivot + Point2::new(half.x, half.y),
            pivot + Point2::new(half.x, -half.y),
        ];
        let rotation = if self.rotate && !transform.rotation.is_zero() {
            for vertex in &mut vertices {
                *vertex = vertex.rotated_about(pivot, transform.rotation);
            }
            transform.rotation
        } else {
            T::zero()
        };
        Shape {
            pivot,
            vertices,
            size,
            rotation,
        }
    }
}

/// The unit every collision algorithm operates on: a convex polygon with clockwise winding.
///
/// A `Shape` is cheap to build and meant to be rebuilt from live inputs on every evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape<T: Scalar = f32> {
    pivot: Point2<T>,
    vertices: Vec<Point2<T>>,
    size: Point2<T>,
    rotation: T,
}

impl<T: Scalar> Shape<T> {
    /// An axis-aligned rectangle centred on `pivot`.
    pub fn rect(pivot: Point2<T>, size: Point2<T>) -> Self {
        ShapeBuilder::new(&Plane::new(pivot, size)).build()
    }

    /// Wraps `vertices` as-is. Winding and convexity are the caller's responsibility; prefer
    /// [`Shape::polygon`] for untrusted input.
    pub fn from_vertices(pivot: Point2<T>, vertices: Vec<Point2<T>>) -> Self {
        let size = polygon::extent_of(&vertices);
        Self {
            pivot,
            vertices,
            size,
            rotation: T::zero(),
        }
    }

    /// A convex polygon from marker points given in `transform`'s local space.
    ///
    /// Each marker maps to `marker * scale + centre`; rotation is not applied. The result must
    /// have at least 3 vertices and be convex with clockwise winding.
    ///
    /// # Examples
    ///
    /// ```
    /// use hitplane::core::prelude::*;
    ///
    /// let transform = Transform::with_centre(Vec2 { x: 5.0, y: 5.0 });
    /// let trapezoid = [
    ///     Vec2 { x: -2.0, y: -1.0 },
    ///     Vec2 { x: -1.0, y: 1.0 },
    ///     Vec2 { x: 1.0, y: 1.0 },
    ///     Vec2 { x: 2.0, y: -1.0 },
    /// ];
    /// let shape = Shape::polygon(&transform, &trapezoid).unwrap();
    /// assert_eq!(shape.vertices()[0], Vec2 { x: 3.0, y: 4.0 });
    ///
    /// let anticlockwise = trapezoid.iter().rev().copied().collect::<Vec<_>>();
    /// assert!(Shape::polygon(&transform, &anticlockwise).is_err());
    /// ```
    pub fn polygon(transform: &Transform<T>, markers: &[Point2<T>]) -> Result<Self> {
        if markers.len() < 3 {
            bail!(
                "polygon needs at least 3 vertices, got {}: {markers:?}",
                markers.len()
            );
        }
        let vertices = markers
            .iter()
            .map(|&marker| transform.apply_unrotated(marker))
            .collect_vec();
        if !polygon::is_convex(&vertices) {
            bail!("polygon is not convex: {vertices:?}");
        }
        if !polygon::is_clockwise(&vertices) {
            bail!(
                "polygon must be wound clockwise (signed area {}): {vertices:?}",
                polygon::signed_area(&vertices)
            );
        }
        Ok(Self::from_vertices(transform.centre, vertices))
    }

    pub fn pivot(&self) -> Point2<T> {
        self.pivot
    }
    pub fn vertices(&self) -> &[Point2<T>] {
        &self.vertices
    }
    /// Full folded width and height. For polygons this is the extent of the vertices.
    pub fn size(&self) -> Point2<T> {
        self.size
    }
    pub fn rotation(&self) -> T {
        self.rotation
    }
    pub fn is_rotated(&self) -> bool {
        !self.rotation.is_zero()
    }

    pub fn signed_area(&self) -> T {
        polygon::signed_area(&self.vertices)
    }

    /// `min..max` on each axis over the vertices, or the pivot if there are none.
    pub fn bounds(&self) -> (Range<T>, Range<T>) {
        polygon::bounds_of(&self.vertices)
            .unwrap_or((self.pivot.x..self.pivot.x, self.pivot.y..self.pivot.y))
    }

    /// Rigid translation; the shape keeps its rotation.
    #[must_use]
    pub fn translated(&self, by: Point2<T>) -> Self {
        Self {
            pivot: self.pivot + by,
            vertices: self.vertices.iter().map(|&v| v + by).collect(),
            size: self.size,
            rotation: self.rotation,
        }
    }

    /// Rotates every vertex about `pivot` (not necessarily the shape's own).
    #[must_use]
    pub fn rotated_about(&self, pivot: Point2<T>, radians: T) -> Self {
        Self {
            pivot: self.pivot.rotated_about(pivot, radians),
            vertices: self
                .vertices
                .iter()
                .map(|v| v.rotated_about(pivot, radians))
                .collect(),
            size: self.size,
            rotation: self.rotation + radians,
        }
    }
}

impl<T: Scalar> AxisAlignedExtent<T> for Shape<T> {
    fn extent(&self) -> Point2<T> {
        let (xs, ys) = self.bounds();
        Point2::new(xs.end - xs.start, ys.end - ys.start)
    }

    fn centre(&self) -> Point2<T> {
        let (xs, ys) = self.bounds();
        Point2::new(xs.start + xs.end, ys.start + ys.end) * T::half()
    }

    fn left(&self) -> T {
        self.bounds().0.start
    }
    fn right(&self) -> T {
        self.bounds().0.end
    }
    fn top(&self) -> T {
        self.bounds().1.end
    }
    fn bottom(&self) -> T {
        self.bounds().1.start
    }
}

impl<T: Scalar> Polygonal<T> for Shape<T> {
    fn vertices(&self) -> Vec<Point2<T>> {
        self.vertices.clone()
    }

    fn pivot(&self) -> Point2<T> {
        self.pivot
    }

    fn is_degenerate(&self) -> bool {
        polygon::is_degenerate(&self.vertices)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle<T: Scalar = f32> {
    pub pivot: Point2<T>,
    pub radius: T,
}

impl<T: Scalar> Circle<T> {
    pub fn new(pivot: Point2<T>, radius: T) -> Self {
        Self { pivot, radius }
    }

    /// Radius is half the folded width. Planes are assumed square; anything else is logged and
    /// the height ignored.
    pub fn from_plane(plane: &Plane<T>, parent: Option<&Plane<T>>) -> Self {
        let (transform, size) = plane.projected(parent);
        if !gg_float::almost_zero(size.x - size.y) {
            warn!("circle built from non-square plane: size {size}, using width");
        }
        Self::new(transform.centre, size.x * T::half())
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= T::zero()
    }

    #[must_use]
    pub fn translated(&self, by: Point2<T>) -> Self {
        Self::new(self.pivot + by, self.radius)
    }
}
