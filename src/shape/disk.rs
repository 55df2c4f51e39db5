//! Definition of the disk shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{EntityType, Plane, Primitive};
use crate::utils::PointMap;

/// A flat disk of radius `radius` laying on a plane.
///
/// The center of the disk is the origin of its laying plane.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Disk {
    /// The radius of the disk.
    pub radius: Real,
    /// The plane the disk lays on.
    pub plane: Plane,
}

impl Default for Disk {
    fn default() -> Self {
        Disk {
            radius: Real::NAN,
            plane: Plane::default(),
        }
    }
}

impl Disk {
    /// Creates a new disk from its radius, center and normal.
    #[inline]
    pub fn new(radius: Real, center: Point<Real>, normal: Vector<Real>) -> Disk {
        Disk {
            radius,
            plane: Plane::new(center, normal),
        }
    }

    /// The center of this disk.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.plane.origin
    }

    /// The unit normal of this disk.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        self.plane.normal
    }

    /// The plane this disk lays on.
    #[inline]
    pub fn laying_plane(&self) -> Plane {
        self.plane
    }

    /// Does this disk contain the point `pt`, within `tol`?
    pub fn contains_point(&self, pt: &Point<Real>, tol: Real) -> bool {
        self.plane.contains_point(pt, tol) && (pt - self.center()).norm() <= self.radius + tol
    }
}

impl Primitive for Disk {
    const TYPE: EntityType = EntityType::Disk;

    fn translated(&self, v: &Vector<Real>) -> Self {
        Disk {
            radius: self.radius,
            plane: self.plane.translated(v),
        }
    }

    fn transformed(&self, m: &impl PointMap) -> Self {
        Disk {
            radius: self.radius,
            plane: self.plane.transformed(m),
        }
    }

    fn is_degenerate(&self, tol: Real) -> bool {
        !(self.radius > tol) || self.plane.is_degenerate(tol)
    }

    /// The exact AABB of the disk: its extent along the axis `i` is `radius * sqrt(1 - n_i²)`.
    fn aabb(&self) -> Option<Aabb> {
        let n = self.normal();
        let half_extents = Vector::new(
            (1.0 - n.x * n.x).max(0.0).sqrt(),
            (1.0 - n.y * n.y).max(0.0).sqrt(),
            (1.0 - n.z * n.z).max(0.0).sqrt(),
        ) * self.radius;
        Some(Aabb::from_half_extents(self.center(), half_extents))
    }

    fn is_clampable(&self) -> bool {
        true
    }

    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(self.radius, other.radius, epsilon = tol)
            && self.plane.relative_eq(&other.plane, tol)
    }
}

#[cfg(test)]
mod test {
    use super::Disk;
    use crate::math::{Affine, HomogeneousMatrix, Point, Vector, DEFAULT_EPSILON};
    use crate::shape::Primitive;

    #[test]
    fn aabb_is_flat_along_the_normal() {
        let disk = Disk::new(2.0, Point::new(1.0, 0.0, 0.0), Vector::y());
        let aabb = disk.aabb().unwrap();
        assert_relative_eq!(aabb.mins, Point::new(-1.0, 0.0, -2.0));
        assert_relative_eq!(aabb.maxs, Point::new(3.0, 0.0, 2.0));
        assert!(disk.contains_point(&Point::new(2.0, 0.0, 1.0), DEFAULT_EPSILON));
        assert!(!disk.contains_point(&Point::new(2.0, 0.5, 1.0), DEFAULT_EPSILON));
    }

    #[test]
    fn sheared_disk_keeps_its_laying_plane() {
        let disk = Disk::new(1.0, Point::new(0.0, 0.0, 1.0), Vector::z());
        let shear = Affine::from_matrix_unchecked(HomogeneousMatrix::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.5, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ));
        let mapped = disk.transformed(&shear);

        assert_relative_eq!(mapped.center(), Point::new(0.0, 0.0, 1.0));
        assert_relative_eq!(mapped.normal(), Vector::new(-0.5, 0.0, 1.0).normalize());
        let rim = shear.transform_point(&Point::new(1.0, 0.0, 1.0));
        assert!(mapped.laying_plane().contains_point(&rim, 1.0e-12));
    }
}
