use super::Support;
use crate::math::{Real, Vector};
use crate::query::predicates::vectors_orthogonal;
use crate::query::Unsupported;
use crate::shape::Entity;

/// Are the vectors `a` and `b` parallel, within `tol`?
///
/// Both vectors are normalized first, so `tol` bounds the sine of their angle.
/// Null vectors are never parallel to anything.
#[inline]
pub fn vectors_parallel(a: &Vector<Real>, b: &Vector<Real>, tol: Real) -> bool {
    match (a.try_normalize(0.0), b.try_normalize(0.0)) {
        (Some(a), Some(b)) => a.cross(&b).norm() <= tol,
        _ => false,
    }
}

/// Are the entities `e1` and `e2` parallel, within `tol`?
///
/// - two lines, rays, or segments are parallel if their directions are,
/// - a line-like entity is parallel to a plane-like one if its direction is orthogonal
///   to the normal of the laying plane,
/// - two plane-like entities are parallel if their normals are.
///
/// Points, balls, and the empty entity have no direction and result in [`Unsupported`].
pub fn is_parallel(e1: &Entity, e2: &Entity, tol: Real) -> Result<bool, Unsupported> {
    let unsupported = || Unsupported::new(e1.entity_type(), e2.entity_type());
    let s1 = Support::of(e1).ok_or_else(unsupported)?;
    let s2 = Support::of(e2).ok_or_else(unsupported)?;

    Ok(match (s1, s2) {
        (Support::Linear(_, d1), Support::Linear(_, d2)) => vectors_parallel(&d1, &d2, tol),
        (Support::Linear(_, d), Support::Planar(p))
        | (Support::Planar(p), Support::Linear(_, d)) => vectors_orthogonal(&d, &p.normal, tol),
        (Support::Planar(p1), Support::Planar(p2)) => vectors_parallel(&p1.normal, &p2.normal, tol),
    })
}
