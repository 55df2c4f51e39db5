//! Definition of the line shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{EntityType, Primitive};
use crate::utils::PointMap;

/// An infinite line, going through `origin` along `direction` in both ways.
///
/// The direction does not need to be normalized.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Line {
    /// A point on the line.
    pub origin: Point<Real>,
    /// The direction of the line.
    pub direction: Vector<Real>,
}

impl Default for Line {
    fn default() -> Self {
        Line::new(
            Point::new(Real::NAN, Real::NAN, Real::NAN),
            Vector::repeat(Real::NAN),
        )
    }
}

impl Line {
    /// Creates a new line from a point and a direction.
    #[inline]
    pub fn new(origin: Point<Real>, direction: Vector<Real>) -> Line {
        Line { origin, direction }
    }

    /// Creates the line going through `a` and `b`.
    #[inline]
    pub fn through(a: Point<Real>, b: Point<Real>) -> Line {
        Line::new(a, b - a)
    }

    /// The point at parameter `t`, i.e., `origin + direction * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.direction * t
    }

    /// The parameter of the projection of `pt` on this line.
    #[inline]
    pub fn project_parameter(&self, pt: &Point<Real>) -> Real {
        (pt - self.origin).dot(&self.direction) / self.direction.norm_squared()
    }

    /// The distance between `pt` and this line.
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        (pt - self.point_at(self.project_parameter(pt))).norm()
    }

    /// Does this line contain the point `pt`, within `tol`?
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        self.distance_to_point(pt) <= tol
    }
}

impl Primitive for Line {
    const TYPE: EntityType = EntityType::Line;

    fn translated(&self, v: &Vector<Real>) -> Self {
        Line::new(self.origin + v, self.direction)
    }

    fn transformed(&self, m: &impl PointMap) -> Self {
        Line::new(m.map_point(&self.origin), m.map_vector(&self.direction))
    }

    fn is_degenerate(&self, tol: Real) -> bool {
        !(self.direction.norm() > tol) || self.origin.is_degenerate(tol)
    }

    fn aabb(&self) -> Option<Aabb> {
        None
    }

    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(self.origin, other.origin, epsilon = tol)
            && relative_eq!(self.direction, other.direction, epsilon = tol)
    }
}
