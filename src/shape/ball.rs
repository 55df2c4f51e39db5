//! Definition of the ball shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{EntityType, Primitive};
use crate::utils::PointMap;

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
    /// The center of the ball.
    pub center: Point<Real>,
}

impl Default for Ball {
    fn default() -> Self {
        Ball::new(Real::NAN, Point::new(Real::NAN, Real::NAN, Real::NAN))
    }
}

impl Ball {
    /// Creates a new ball from its radius and center.
    #[inline]
    pub fn new(radius: Real, center: Point<Real>) -> Ball {
        Ball { radius, center }
    }

    /// Does this ball contain the point `pt`, within `tol`?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        (pt - self.center).norm() <= self.radius + tol
    }
}

impl Primitive for Ball {
    const TYPE: EntityType = EntityType::Ball;

    fn translated(&self, v: &Vector<Real>) -> Self {
        Ball::new(self.radius, self.center + v)
    }

    /// Maps the center of the ball. The radius is left unchanged, so affine maps
    /// with a non-uniform scaling are only approximated.
    fn transformed(&self, m: &impl PointMap) -> Self {
        Ball::new(self.radius, m.map_point(&self.center))
    }

    fn is_degenerate(&self, tol: Real) -> bool {
        !(self.radius > tol) || self.center.is_degenerate(tol)
    }

    fn aabb(&self) -> Option<Aabb> {
        Some(Aabb::from_half_extents(
            self.center,
            Vector::repeat(self.radius),
        ))
    }

    fn is_clampable(&self) -> bool {
        true
    }

    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(self.radius, other.radius, epsilon = tol)
            && relative_eq!(self.center, other.center, epsilon = tol)
    }
}
