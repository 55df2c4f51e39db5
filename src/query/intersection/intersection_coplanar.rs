use super::intersection_collinear::intersection_collinear;
use super::intersection_linear::linear_chord;
use super::linear::Linear;
use crate::math::{Point, Real};
use crate::query::predicates::{linear_collinear, vectors_parallel};
use crate::shape::{Disk, Entity, Triangle};
use arrayvec::ArrayVec;

/// Intersection between two line-like entities known to lay on a common plane.
///
/// Parallel entities are either collinear, and overlap, or do not intersect at all.
pub fn intersection_coplanar_linear_linear(
    l1: &Linear,
    l2: &Linear,
    tol: Real,
) -> Option<Entity> {
    if linear_collinear(&l1.origin, &l1.direction, &l2.origin, &l2.direction, tol) {
        return intersection_collinear(l1, l2, tol);
    }

    intersection_coplanar_crossing(l1, l2, tol).map(Entity::Point)
}

/// The crossing point of two coplanar, non-parallel, line-like entities.
pub(crate) fn intersection_coplanar_crossing(
    l1: &Linear,
    l2: &Linear,
    tol: Real,
) -> Option<Point<Real>> {
    if vectors_parallel(&l1.direction, &l2.direction, tol) {
        return None;
    }

    let n = l1.direction.cross(&l2.direction);
    let w = l2.origin - l1.origin;
    let nn = n.norm_squared();
    let t1 = w.cross(&l2.direction).dot(&n) / nn;
    let t2 = w.cross(&l1.direction).dot(&n) / nn;

    if l1.admits(t1, tol) && l2.admits(t2, tol) {
        Some(l1.point_at(t1))
    } else {
        None
    }
}

/// Intersection between a line-like entity and a triangle laying on a common plane.
///
/// The supporting line is cut by the three edges of the triangle, and the resulting
/// interval is clipped to the parameter range of the line-like entity.
pub fn intersection_coplanar_linear_triangle(
    linear: &Linear,
    triangle: &Triangle,
    tol: Real,
) -> Option<Entity> {
    let line = linear.supporting_line();
    let mut hits: ArrayVec<Real, 6> = ArrayVec::new();

    for edge in triangle.edges() {
        let edge = Linear::from_segment(&edge);

        if linear_collinear(&line.origin, &line.direction, &edge.origin, &edge.direction, tol) {
            hits.push(line.project_parameter(&edge.origin));
            hits.push(line.project_parameter(&edge.point_at(1.0)));
        } else if let Some(pt) = intersection_coplanar_crossing(&line, &edge, tol) {
            hits.push(line.project_parameter(&pt));
        }
    }

    let (t0, t1) = hits
        .iter()
        .fold(None, |acc: Option<(Real, Real)>, &t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })?;

    linear.clip(t0, t1, tol)
}

/// Intersection between a line-like entity and a disk laying on a common plane.
///
/// The supporting line crosses the boundary circle of the disk at most twice. A line
/// whose distance to the center is within `tol` of the radius is tangent, and results in
/// a point.
pub fn intersection_coplanar_linear_disk(
    linear: &Linear,
    disk: &Disk,
    tol: Real,
) -> Option<Entity> {
    linear_chord(linear, &disk.center(), disk.radius, tol)
}
