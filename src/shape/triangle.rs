//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{EntityType, Plane, Primitive, Segment};
use crate::utils::PointMap;

use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Default for Triangle {
    fn default() -> Self {
        let nan = Point::new(Real::NAN, Real::NAN, Real::NAN);
        Triangle::new(nan, nan, nan)
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Reference to an array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The edges of this triangle: `ab`, `bc` and `ca`.
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// A vector normal of this triangle, with a norm equal to twice its area.
    ///
    /// The vector points such that it is collinear to `AB × AC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The plane this triangle lays on.
    #[inline]
    pub fn laying_plane(&self) -> Plane {
        Plane::new(self.a, self.scaled_normal())
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// The barycentric coordinates of the projection of `pt` on the plane of this triangle.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> Option<[Real; 3]> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = pt - self.a;

        let d00 = ab.dot(&ab);
        let d01 = ab.dot(&ac);
        let d11 = ac.dot(&ac);
        let d20 = ap.dot(&ab);
        let d21 = ap.dot(&ac);
        let denom = d00 * d11 - d01 * d01;

        if relative_eq!(denom, 0.0) {
            return None;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some([1.0 - v - w, v, w])
    }

    /// Does this triangle contain the point `pt`, within `tol`?
    ///
    /// The point must lie on the plane of the triangle and inside of its edges.
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        if !self.laying_plane().contains_point(pt, tol) {
            return false;
        }

        match self.barycentric_coordinates(pt) {
            Some(bcoords) => bcoords.iter().all(|c| *c >= -tol),
            None => false,
        }
    }
}

impl Primitive for Triangle {
    const TYPE: EntityType = EntityType::Triangle;

    fn translated(&self, v: &Vector<Real>) -> Self {
        Triangle::new(self.a + v, self.b + v, self.c + v)
    }

    fn transformed(&self, m: &impl PointMap) -> Self {
        Triangle::new(m.map_point(&self.a), m.map_point(&self.b), m.map_point(&self.c))
    }

    fn is_degenerate(&self, tol: Real) -> bool {
        !(self.area() > tol)
    }

    fn aabb(&self) -> Option<Aabb> {
        Some(Aabb::from_points(self.vertices()))
    }

    fn is_clampable(&self) -> bool {
        true
    }

    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(self.a, other.a, epsilon = tol)
            && relative_eq!(self.b, other.b, epsilon = tol)
            && relative_eq!(self.c, other.c, epsilon = tol)
    }
}
