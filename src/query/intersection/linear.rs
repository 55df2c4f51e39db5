use crate::math::{Point, Real, Vector};
use crate::shape::{Entity, Line, Ray, Segment};
use crate::utils;

/// The parameter range admitted by a line-like entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinearKind {
    /// Parameters in `(-∞, +∞)`.
    Line,
    /// Parameters in `[0, +∞)`.
    Ray,
    /// Parameters in `[0, 1]`.
    Segment,
}

/// A uniform view of lines, rays and segments: `origin + t * direction` for every `t`
/// admitted by `kind`.
///
/// The direction of a segment is `b - a`, so that its parameter range is `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Linear {
    /// The point at parameter `0`.
    pub origin: Point<Real>,
    /// The direction, scaled so that segments end at parameter `1`.
    pub direction: Vector<Real>,
    /// The admitted parameter range.
    pub kind: LinearKind,
}

impl Linear {
    /// The view of a line.
    #[inline]
    pub fn from_line(line: &Line) -> Self {
        Linear {
            origin: line.origin,
            direction: line.direction,
            kind: LinearKind::Line,
        }
    }

    /// The view of a ray.
    #[inline]
    pub fn from_ray(ray: &Ray) -> Self {
        Linear {
            origin: ray.origin,
            direction: ray.direction,
            kind: LinearKind::Ray,
        }
    }

    /// The view of a segment.
    #[inline]
    pub fn from_segment(segment: &Segment) -> Self {
        Linear {
            origin: segment.a,
            direction: segment.scaled_direction(),
            kind: LinearKind::Segment,
        }
    }

    /// The view of a line, ray or segment entity.
    pub fn from_entity(entity: &Entity) -> Option<Self> {
        match entity {
            Entity::Line(l) => Some(Self::from_line(l)),
            Entity::Ray(r) => Some(Self::from_ray(r)),
            Entity::Segment(s) => Some(Self::from_segment(s)),
            _ => None,
        }
    }

    /// The entity this view was built from.
    pub fn to_entity(&self) -> Entity {
        match self.kind {
            LinearKind::Line => Entity::Line(Line::new(self.origin, self.direction)),
            LinearKind::Ray => Entity::Ray(Ray::new(self.origin, self.direction)),
            LinearKind::Segment => {
                Entity::Segment(Segment::new(self.origin, self.origin + self.direction))
            }
        }
    }

    /// The infinite line supporting this view.
    #[inline]
    pub fn supporting_line(&self) -> Linear {
        Linear {
            kind: LinearKind::Line,
            ..*self
        }
    }

    /// The point at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.direction * t
    }

    /// The parameter of the orthogonal projection of `pt` on the supporting line.
    #[inline]
    pub fn project_parameter(&self, pt: &Point<Real>) -> Real {
        (pt - self.origin).dot(&self.direction) / self.direction.norm_squared()
    }

    /// The bounds of the admitted parameter range.
    #[inline]
    pub fn range(&self) -> (Real, Real) {
        match self.kind {
            LinearKind::Line => (Real::NEG_INFINITY, Real::INFINITY),
            LinearKind::Ray => (0.0, Real::INFINITY),
            LinearKind::Segment => (0.0, 1.0),
        }
    }

    /// Converts the distance tolerance `tol` into a tolerance on the parameter.
    #[inline]
    fn parameter_tolerance(&self, tol: Real) -> Real {
        tol / self.direction.norm()
    }

    /// Is the parameter `t` admitted, within the distance tolerance `tol`?
    #[inline]
    pub fn admits(&self, t: Real, tol: Real) -> bool {
        let (lo, hi) = self.range();
        let eps = self.parameter_tolerance(tol);
        t >= lo - eps && t <= hi + eps
    }

    /// Does this line-like entity contain the point `pt`, within `tol`?
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        let t = self.project_parameter(pt);
        self.admits(t, tol) && (self.point_at(t) - pt).norm() <= tol
    }

    /// Intersects the parameter interval `[t0, t1]` of the supporting line with the range
    /// admitted by `self`.
    ///
    /// The result is a segment, or a point if the overlap is shorter than `tol`.
    pub fn clip(&self, t0: Real, t1: Real, tol: Real) -> Option<Entity> {
        let (t0, t1) = utils::sort2(t0, t1);
        let (lo, hi) = self.range();
        let eps = self.parameter_tolerance(tol);

        if t1 < lo - eps || t0 > hi + eps {
            return None;
        }

        let a = t0.max(lo).min(hi);
        let b = t1.min(hi).max(lo);
        Some(segment_or_point(self.point_at(a), self.point_at(b), tol))
    }
}

/// The segment `[a, b]`, or its middle point if it is shorter than `tol`.
pub(crate) fn segment_or_point(a: Point<Real>, b: Point<Real>, tol: Real) -> Entity {
    if (b - a).norm() <= tol {
        Entity::Point(na::center(&a, &b))
    } else {
        Entity::Segment(Segment::new(a, b))
    }
}
