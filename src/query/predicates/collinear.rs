use super::Support;
use crate::math::{Point, Real, Vector};
use crate::query::predicates::vectors_parallel;
use crate::query::Unsupported;
use crate::shape::{Entity, Line};

/// Do the two lines `(o1, d1)` and `(o2, d2)` support the same infinite line, within `tol`?
///
/// The directions must be parallel and the second origin must lie on the first line.
pub fn linear_collinear(
    o1: &Point<Real>,
    d1: &Vector<Real>,
    o2: &Point<Real>,
    d2: &Vector<Real>,
    tol: Real,
) -> bool {
    vectors_parallel(d1, d2, tol) && Line::new(*o1, *d1).contains_point(o2, tol)
}

/// Are the entities `e1` and `e2` collinear, within `tol`?
///
/// Collinearity is only defined between lines, rays, and segments. Any other entity
/// results in [`Unsupported`].
pub fn is_collinear(e1: &Entity, e2: &Entity, tol: Real) -> Result<bool, Unsupported> {
    match (Support::of(e1), Support::of(e2)) {
        (Some(Support::Linear(o1, d1)), Some(Support::Linear(o2, d2))) => {
            Ok(linear_collinear(&o1, &d1, &o2, &d2, tol))
        }
        _ => Err(Unsupported::new(e1.entity_type(), e2.entity_type())),
    }
}
