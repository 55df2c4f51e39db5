use crate::math::{Affine, Isometry, Matrix, Point, Real, Vector};

/// A map from the 3-dimensional space to itself that can be applied to every primitive.
///
/// This is implemented by rigid transformations ([`Isometry`]) and affine transformations
/// ([`Affine`]). Directions are mapped by the linear part of the map, and normals by its
/// inverse transpose so that mapped planes still contain the mapped points.
pub trait PointMap {
    /// Maps a point.
    fn map_point(&self, pt: &Point<Real>) -> Point<Real>;
    /// Maps a direction, ignoring the translational part of `self`.
    fn map_vector(&self, v: &Vector<Real>) -> Vector<Real>;
    /// Maps the normal `n` of a plane to a unit normal of the mapped plane.
    ///
    /// Returns the zero vector if the linear part of `self` is singular.
    fn map_normal(&self, n: &Vector<Real>) -> Vector<Real>;
}

impl PointMap for Isometry<Real> {
    #[inline]
    fn map_point(&self, pt: &Point<Real>) -> Point<Real> {
        self * pt
    }

    #[inline]
    fn map_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self * v
    }

    #[inline]
    fn map_normal(&self, n: &Vector<Real>) -> Vector<Real> {
        self.rotation * n
    }
}

impl PointMap for Affine<Real> {
    #[inline]
    fn map_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.transform_point(pt)
    }

    #[inline]
    fn map_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.transform_vector(v)
    }

    fn map_normal(&self, n: &Vector<Real>) -> Vector<Real> {
        let linear: Matrix<Real> = self.matrix().fixed_view::<3, 3>(0, 0).into_owned();
        linear
            .try_inverse()
            .and_then(|inv| (inv.transpose() * n).try_normalize(0.0))
            .unwrap_or_else(Vector::zeros)
    }
}

#[cfg(test)]
mod test {
    use super::PointMap;
    use crate::math::{Affine, HomogeneousMatrix, Isometry, Point, Vector};

    #[test]
    fn vectors_ignore_translation() {
        let iso = Isometry::translation(1.0, 2.0, 3.0);
        assert_eq!(iso.map_vector(&Vector::x()), Vector::x());
        assert_eq!(iso.map_point(&Point::origin()), Point::new(1.0, 2.0, 3.0));

        let aff = Affine::from_matrix_unchecked(HomogeneousMatrix::new_nonuniform_scaling(
            &Vector::new(2.0, 1.0, 1.0),
        ));
        assert_eq!(aff.map_vector(&Vector::x()), Vector::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn normals_stay_orthogonal_to_mapped_directions() {
        let aff = Affine::from_matrix_unchecked(HomogeneousMatrix::new(
            2.0, 0.5, 0.0, 1.0, //
            0.0, 1.0, 0.0, -2.0, //
            0.0, 0.3, 3.0, 0.5, //
            0.0, 0.0, 0.0, 1.0,
        ));
        let normal = Vector::new(1.0, 1.0, 0.0).normalize();
        let tangents = [Vector::new(1.0, -1.0, 0.0), Vector::z()];

        let mapped = aff.map_normal(&normal);
        assert_relative_eq!(mapped.norm(), 1.0, epsilon = 1.0e-12);
        for t in &tangents {
            assert_relative_eq!(mapped.dot(&aff.map_vector(t)), 0.0, epsilon = 1.0e-12);
        }

        let iso = Isometry::new(Vector::new(1.0, 2.0, 3.0), Vector::new(0.1, 0.2, 0.3));
        assert_relative_eq!(iso.map_normal(&normal), iso.map_vector(&normal));

        let flat = Affine::from_matrix_unchecked(HomogeneousMatrix::new_nonuniform_scaling(
            &Vector::new(1.0, 1.0, 0.0),
        ));
        assert_eq!(flat.map_normal(&normal), Vector::zeros());
    }
}
