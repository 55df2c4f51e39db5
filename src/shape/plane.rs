//! Definition of the plane shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{EntityType, Primitive};
use crate::utils::PointMap;

/// An infinite plane going through `origin`, with the unit normal `normal`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// A point on the plane.
    pub origin: Point<Real>,
    /// The unit normal of the plane.
    pub normal: Vector<Real>,
}

impl Default for Plane {
    fn default() -> Self {
        Plane {
            origin: Point::new(Real::NAN, Real::NAN, Real::NAN),
            normal: Vector::repeat(Real::NAN),
        }
    }
}

impl Plane {
    /// Creates a new plane from a point and a normal.
    ///
    /// The normal is normalized. A zero normal results in a degenerate plane.
    #[inline]
    pub fn new(origin: Point<Real>, normal: Vector<Real>) -> Plane {
        Plane {
            origin,
            normal: normal.normalize(),
        }
    }

    /// The constant `d` of the plane equation `normal · x = d`.
    #[inline]
    pub fn d(&self) -> Real {
        self.normal.dot(&self.origin.coords)
    }

    /// The signed distance between `pt` and this plane, positive on the side of the normal.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&(pt - self.origin))
    }

    /// The distance between `pt` and this plane.
    #[inline]
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        self.signed_distance(pt).abs()
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal * self.signed_distance(pt)
    }

    /// Does this plane contain the point `pt`, within `tol`?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        self.distance(pt) <= tol
    }

    /// Flips the normal of this plane.
    #[inline]
    pub fn reverse(&mut self) {
        self.normal = -self.normal;
    }
}

impl Primitive for Plane {
    const TYPE: EntityType = EntityType::Plane;

    fn translated(&self, v: &Vector<Real>) -> Self {
        Plane {
            origin: self.origin + v,
            normal: self.normal,
        }
    }

    fn transformed(&self, m: &impl PointMap) -> Self {
        Plane::new(m.map_point(&self.origin), m.map_normal(&self.normal))
    }

    fn is_degenerate(&self, tol: Real) -> bool {
        !(self.normal.norm() > tol) || self.origin.is_degenerate(tol)
    }

    fn aabb(&self) -> Option<Aabb> {
        None
    }

    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(self.origin, other.origin, epsilon = tol)
            && relative_eq!(self.normal, other.normal, epsilon = tol)
    }
}

#[cfg(test)]
mod test {
    use super::Plane;
    use crate::math::{Affine, HomogeneousMatrix, Point, Vector};
    use crate::shape::Primitive;

    #[test]
    fn signed_distance_follows_normal() {
        let plane = Plane::new(Point::new(0.0, 0.0, 1.0), Vector::new(0.0, 0.0, 2.0));
        assert_relative_eq!(plane.normal, Vector::z());
        assert_relative_eq!(plane.d(), 1.0);
        assert_relative_eq!(plane.signed_distance(&Point::new(3.0, 4.0, 3.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(&Point::new(3.0, 4.0, -1.0)), -2.0);
        assert_relative_eq!(
            plane.project_point(&Point::new(3.0, 4.0, -1.0)),
            Point::new(3.0, 4.0, 1.0)
        );
    }

    #[test]
    fn non_uniform_scaling_keeps_the_mapped_points() {
        let plane = Plane::new(Point::origin(), Vector::new(1.0, 1.0, 0.0));
        let scale = Affine::from_matrix_unchecked(HomogeneousMatrix::new_nonuniform_scaling(
            &Vector::new(2.0, 1.0, 1.0),
        ));
        let mapped = plane.transformed(&scale);

        assert_relative_eq!(mapped.normal, Vector::new(1.0, 2.0, 0.0).normalize());
        for pt in [Point::new(1.0, -1.0, 0.0), Point::new(-3.0, 3.0, 5.0)] {
            assert!(plane.contains_point(&pt, 1.0e-12));
            assert_relative_eq!(
                mapped.signed_distance(&scale.transform_point(&pt)),
                0.0,
                epsilon = 1.0e-12
            );
        }
    }
}
