//! Definition of the ray shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{EntityType, Line, Primitive};
use crate::utils::PointMap;

/// A half-line starting at `origin` and going along `direction`.
///
/// The direction does not need to be normalized.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub direction: Vector<Real>,
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(
            Point::new(Real::NAN, Real::NAN, Real::NAN),
            Vector::repeat(Real::NAN),
        )
    }
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `direction`.
    #[inline]
    pub fn new(origin: Point<Real>, direction: Vector<Real>) -> Ray {
        Ray { origin, direction }
    }

    /// Computes the point at parameter `t` along this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.direction * t
    }

    /// The line supporting this ray.
    #[inline]
    pub fn to_line(&self) -> Line {
        Line::new(self.origin, self.direction)
    }

    /// Does this ray contain the point `pt`, within `tol`?
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        let line = self.to_line();
        let t = line.project_parameter(pt);
        t * self.direction.norm() >= -tol && line.contains_point(pt, tol)
    }
}

impl Primitive for Ray {
    const TYPE: EntityType = EntityType::Ray;

    fn translated(&self, v: &Vector<Real>) -> Self {
        Ray::new(self.origin + v, self.direction)
    }

    fn transformed(&self, m: &impl PointMap) -> Self {
        Ray::new(m.map_point(&self.origin), m.map_vector(&self.direction))
    }

    fn is_degenerate(&self, tol: Real) -> bool {
        self.to_line().is_degenerate(tol)
    }

    fn aabb(&self) -> Option<Aabb> {
        None
    }

    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(self.origin, other.origin, epsilon = tol)
            && relative_eq!(self.direction, other.direction, epsilon = tol)
    }
}
