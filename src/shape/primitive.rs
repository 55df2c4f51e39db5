use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::EntityType;
use crate::utils::PointMap;

/// Operations shared by every geometric primitive.
///
/// The set of primitives is closed: it is exactly the set of variants of
/// [`Entity`](crate::shape::Entity), which forwards each of these methods to the
/// wrapped primitive.
pub trait Primitive: Copy {
    /// The type tag of this primitive.
    const TYPE: EntityType;

    /// Returns a copy of this primitive translated by `v`.
    fn translated(&self, v: &Vector<Real>) -> Self;

    /// Returns a copy of this primitive mapped by a rigid or affine transformation.
    fn transformed(&self, m: &impl PointMap) -> Self;

    /// Is this primitive degenerate with regard to `tol`?
    ///
    /// Non-finite parameters always make a primitive degenerate.
    fn is_degenerate(&self, tol: Real) -> bool;

    /// The tightest AABB containing this primitive, if it has a finite extent.
    fn aabb(&self) -> Option<Aabb>;

    /// Does this primitive have a finite extent?
    fn is_clampable(&self) -> bool {
        false
    }

    /// Are the parameters of `self` and `other` equal within `tol`?
    fn relative_eq(&self, other: &Self, tol: Real) -> bool;
}

impl Primitive for Point<Real> {
    const TYPE: EntityType = EntityType::Point;

    #[inline]
    fn translated(&self, v: &Vector<Real>) -> Self {
        self + v
    }

    #[inline]
    fn transformed(&self, m: &impl PointMap) -> Self {
        m.map_point(self)
    }

    #[inline]
    fn is_degenerate(&self, _: Real) -> bool {
        !self.coords.iter().all(|e| e.is_finite())
    }

    #[inline]
    fn aabb(&self) -> Option<Aabb> {
        Some(Aabb::new(*self, *self))
    }

    #[inline]
    fn is_clampable(&self) -> bool {
        true
    }

    #[inline]
    fn relative_eq(&self, other: &Self, tol: Real) -> bool {
        relative_eq!(*self, *other, epsilon = tol)
    }
}
