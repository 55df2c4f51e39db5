use super::Support;
use crate::math::{Point, Real, Vector};
use crate::query::predicates::{vectors_orthogonal, vectors_parallel};
use crate::query::Unsupported;
use crate::shape::{Entity, Plane};

/// Do the two lines `(o1, d1)` and `(o2, d2)` lay on a common plane, within `tol`?
///
/// Parallel lines are always coplanar. Otherwise, the distance between the second origin
/// and the plane spanned by both directions through the first origin must not exceed `tol`.
pub fn linear_coplanar(
    o1: &Point<Real>,
    d1: &Vector<Real>,
    o2: &Point<Real>,
    d2: &Vector<Real>,
    tol: Real,
) -> bool {
    if vectors_parallel(d1, d2, tol) {
        return true;
    }

    match d1.cross(d2).try_normalize(0.0) {
        Some(n) => (o2 - o1).dot(&n).abs() <= tol,
        None => true,
    }
}

/// Does the line `(origin, dir)` lay on `plane`, within `tol`?
pub fn linear_plane_coplanar(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    plane: &Plane,
    tol: Real,
) -> bool {
    vectors_orthogonal(dir, &plane.normal, tol) && plane.distance(origin) <= tol
}

/// Are `p1` and `p2` the same plane (up to the orientation of the normal), within `tol`?
pub fn planes_coplanar(p1: &Plane, p2: &Plane, tol: Real) -> bool {
    vectors_parallel(&p1.normal, &p2.normal, tol) && p1.distance(&p2.origin) <= tol
}

/// Do the entities `e1` and `e2` lay on a common plane, within `tol`?
///
/// Triangles and disks are represented by the plane they lay on. Points, balls, and the
/// empty entity result in [`Unsupported`].
pub fn is_coplanar(e1: &Entity, e2: &Entity, tol: Real) -> Result<bool, Unsupported> {
    let unsupported = || Unsupported::new(e1.entity_type(), e2.entity_type());
    let s1 = Support::of(e1).ok_or_else(unsupported)?;
    let s2 = Support::of(e2).ok_or_else(unsupported)?;

    Ok(match (s1, s2) {
        (Support::Linear(o1, d1), Support::Linear(o2, d2)) => {
            linear_coplanar(&o1, &d1, &o2, &d2, tol)
        }
        (Support::Linear(o, d), Support::Planar(p))
        | (Support::Planar(p), Support::Linear(o, d)) => linear_plane_coplanar(&o, &d, &p, tol),
        (Support::Planar(p1), Support::Planar(p2)) => planes_coplanar(&p1, &p2, tol),
    })
}
