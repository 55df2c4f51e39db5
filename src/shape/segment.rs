//! Definition of the segment shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{EntityType, Line, Primitive};
use crate::utils::PointMap;

use core::mem;
use na::{self, Unit};

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Default for Segment {
    fn default() -> Self {
        let nan = Point::new(Real::NAN, Real::NAN, Real::NAN);
        Segment::new(nan, nan)
    }
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a()` toward `self.b()`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }

    /// The middle point of this segment.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// The point at parameter `t`, where `t = 0` gives `a` and `t = 1` gives `b`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// The line supporting this segment, with origin `a` and direction `b - a`.
    #[inline]
    pub fn to_line(&self) -> Line {
        Line::new(self.a, self.scaled_direction())
    }

    /// Does this segment contain the point `pt`, within `tol`?
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        let line = self.to_line();
        let length = self.length();
        let t = line.project_parameter(pt) * length;
        t >= -tol && t <= length + tol && line.contains_point(pt, tol)
    }
}

impl Primitive for Segment {
    const TYPE: EntityType = EntityType::Segment;

    fn translated(&self, v: &Vector<Real>) -> Self {
        Segment::new(self.a + v, self.b + v)
    }

    fn transformed(&self, m: &impl PointMap) -> Self {
        Segment::new(m.map_point(&self.a), m.map_point(&self.b))
    }

    fn is_degenerate(&self, tol: Real) -> bool {
        !(self.length() > tol)
    }

    fn aabb(&self) -> Option<Aabb> {
        Some(Aabb::from_points([self.a, self.b]))
    }

    fn is_clampable(&self) -> bool {
        true
    }

    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(self.a, other.a, epsilon = tol) && relative_eq!(self.b, other.b, epsilon = tol)
    }
}
