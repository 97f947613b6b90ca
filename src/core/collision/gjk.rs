use crate::core::prelude::*;
use crate::util::gg_float;
use crate::warn_every_seconds;

/// How a GJK run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GjkOutcome {
    /// The simplex enclosed the origin: the shapes intersect (or touch).
    Intersecting,
    /// A support point failed to pass the origin: the shapes are disjoint.
    Separated,
    /// Gave up before reaching a verdict. Treat as a (conservative) miss.
    IterationLimit,
    /// One of the shapes has no area and was rejected without running the search.
    Degenerate,
}

impl GjkOutcome {
    pub fn is_intersecting(self) -> bool {
        self == GjkOutcome::Intersecting
    }
}

enum Evolution {
    Continue,
    Done(GjkOutcome),
}

/// Cross product `(a x b) x c` of vectors in the z = 0 plane, which is again in the plane.
fn triple<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Point2<T> {
    b * a.dot(c) - a * b.dot(c)
}

struct Simplex<'a, T: Scalar, A: Polygonal<T>, B: Polygonal<T>> {
    a: &'a A,
    b: &'a B,
    points: Vec<Point2<T>>,
    direction: Point2<T>,
}

impl<'a, T: Scalar, A: Polygonal<T>, B: Polygonal<T>> Simplex<'a, T, A, B> {
    fn new(a: &'a A, b: &'a B) -> Self {
        Self {
            a,
            b,
            points: Vec::with_capacity(3),
            direction: Point2::zero(),
        }
    }

    /// Picks the next search direction, then grows the simplex by one support point.
    fn evolve(&mut self) -> Evolution {
        match self.points.len() {
            0 => {
                self.direction = self.b.pivot() - self.a.pivot();
                if self.direction.almost_eq(Point2::zero()) {
                    self.direction = Point2::right();
                }
            }
            1 => {
                self.direction = -self.direction;
            }
            2 => {
                if let Some(outcome) = self.evolve_line() {
                    return Evolution::Done(outcome);
                }
            }
            3 => {
                if let Some(outcome) = self.evolve_triangle() {
                    return Evolution::Done(outcome);
                }
            }
            n => {
                error!("GJK simplex with {n} points");
                return Evolution::Done(GjkOutcome::IterationLimit);
            }
        }
        self.add_support()
    }

    /// Simplex `[c, b]`: search perpendicular to `cb`, towards the origin.
    fn evolve_line(&mut self) -> Option<GjkOutcome> {
        let c = self.points[0];
        let b = self.points[1];
        let cb = b - c;
        let c0 = -c;
        if gg_float::almost_zero(cb.normed().cross(c0.normed())) {
            // The origin is on the line through c and b.
            let along = c0.dot(cb);
            if T::zero() <= along && along <= cb.len_squared() {
                return Some(GjkOutcome::Intersecting);
            }
            self.direction = cb.left_normal();
        } else {
            self.direction = triple(cb, c0, cb);
        }
        None
    }

    /// Simplex `[c, b, a]` with `a` newest: keep the edge the origin lies beyond, or stop if it
    /// lies beyond neither.
    fn evolve_triangle(&mut self) -> Option<GjkOutcome> {
        let c = self.points[0];
        let b = self.points[1];
        let a = self.points[2];
        let a0 = -a;
        let ab = b - a;
        let ac = c - a;
        if gg_float::almost_zero(ab.normed().cross(ac.normed())) {
            // Flat triangle; fall back to the newest edge.
            self.points.remove(0);
            return self.evolve_line();
        }
        let ab_perp = triple(ac, ab, ab);
        let ac_perp = triple(ab, ac, ac);
        if ab_perp.dot(a0) > T::zero() {
            self.points.remove(0);
            self.direction = ab_perp;
            None
        } else if ac_perp.dot(a0) > T::zero() {
            self.points.remove(1);
            self.direction = ac_perp;
            None
        } else {
            Some(GjkOutcome::Intersecting)
        }
    }

    fn add_support(&mut self) -> Evolution {
        let point = self.a.support(self.direction) - self.b.support(-self.direction);
        self.points.push(point);
        if self.direction.dot(point) < T::zero() {
            Evolution::Done(GjkOutcome::Separated)
        } else {
            Evolution::Continue
        }
    }
}

/// GJK with an explicit iteration cap, one support point per iteration.
pub fn gjk_with_limit<T: Scalar>(
    a: &impl Polygonal<T>,
    b: &impl Polygonal<T>,
    max_iterations: usize,
) -> GjkOutcome {
    if a.is_degenerate() || b.is_degenerate() {
        return GjkOutcome::Degenerate;
    }
    let mut simplex = Simplex::new(a, b);
    for _ in 0..max_iterations {
        if let Evolution::Done(outcome) = simplex.evolve() {
            return outcome;
        }
    }
    debug!(
        "GJK gave up after {max_iterations} iterations, simplex: {:?}",
        simplex.points
    );
    GjkOutcome::IterationLimit
}

/// Intersection test for two convex polygons by growing a simplex inside their Minkowski
/// difference `a - b` until it encloses the origin or provably cannot.
///
/// Gives up after `2 * (|a| + |b|) +` [`GJK_EXTRA_ITERATIONS`] support points.
///
/// # Examples
///
/// ```
/// use hitplane::core::prelude::*;
///
/// let square = Shape::rect(Vec2::one(), Vec2::splat(2.0));
/// assert_eq!(gjk(&square, &square.translated(Vec2 { x: 1.0, y: 0.0 })), GjkOutcome::Intersecting);
/// assert_eq!(gjk(&square, &square.translated(Vec2 { x: 3.0, y: 0.0 })), GjkOutcome::Separated);
/// ```
pub fn gjk<T: Scalar>(a: &impl Polygonal<T>, b: &impl Polygonal<T>) -> GjkOutcome {
    let max_iterations =
        2 * (a.vertices().len() + b.vertices().len()) + GJK_EXTRA_ITERATIONS;
    gjk_with_limit(a, b, max_iterations)
}

/// [`gjk`] as a plain predicate; running out of iterations counts as no intersection.
pub fn gjk_overlap<T: Scalar>(a: &impl Polygonal<T>, b: &impl Polygonal<T>) -> bool {
    match gjk(a, b) {
        GjkOutcome::Intersecting => true,
        GjkOutcome::Separated | GjkOutcome::Degenerate => false,
        GjkOutcome::IterationLimit => {
            warn_every_seconds!(
                WARN_THROTTLE_SECONDS,
                "gjk_overlap(): iteration limit reached, reporting no intersection"
            );
            false
        }
    }
}
