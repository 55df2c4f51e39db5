use super::linear::{segment_or_point, Linear, LinearKind};
use crate::math::{Point, Real};
use crate::shape::{Entity, Ray, Segment};

/// Intersection between two line-like entities known to be collinear.
///
/// A line overlaps the whole of the other entity, so the other entity is returned.
/// Between two lines, the first one is returned.
pub fn intersection_collinear(l1: &Linear, l2: &Linear, tol: Real) -> Option<Entity> {
    match (l1.kind, l2.kind) {
        (LinearKind::Line, LinearKind::Line) => Some(l1.to_entity()),
        (LinearKind::Line, _) => Some(l2.to_entity()),
        (_, LinearKind::Line) => Some(l1.to_entity()),
        (LinearKind::Ray, LinearKind::Ray) => intersection_collinear_ray_ray(
            &Ray::new(l1.origin, l1.direction),
            &Ray::new(l2.origin, l2.direction),
            tol,
        ),
        (LinearKind::Ray, LinearKind::Segment) => intersection_collinear_ray_segment(
            &Ray::new(l1.origin, l1.direction),
            &Segment::new(l2.origin, end_of(l2)),
            tol,
        ),
        (LinearKind::Segment, LinearKind::Ray) => intersection_collinear_ray_segment(
            &Ray::new(l2.origin, l2.direction),
            &Segment::new(l1.origin, end_of(l1)),
            tol,
        ),
        (LinearKind::Segment, LinearKind::Segment) => intersection_collinear_segment_segment(
            &Segment::new(l1.origin, end_of(l1)),
            &Segment::new(l2.origin, end_of(l2)),
            tol,
        ),
    }
}

#[inline]
fn end_of(l: &Linear) -> Point<Real> {
    l.point_at(1.0)
}

/// Intersection between two collinear rays.
///
/// Rays pointing the same way overlap on the ray starting the furthest along their common
/// direction. Rays pointing at each other overlap on the segment between their origins, if
/// any.
pub fn intersection_collinear_ray_ray(r1: &Ray, r2: &Ray, tol: Real) -> Option<Entity> {
    let r2_origin_in_r1 = r1.contains_point(&r2.origin, tol);

    if r1.direction.dot(&r2.direction) > 0.0 {
        if r2_origin_in_r1 {
            Some(Entity::Ray(*r2))
        } else {
            Some(Entity::Ray(*r1))
        }
    } else if r2_origin_in_r1 {
        Some(segment_or_point(r1.origin, r2.origin, tol))
    } else {
        None
    }
}

/// Intersection between a ray and a segment known to be collinear.
pub fn intersection_collinear_ray_segment(
    ray: &Ray,
    segment: &Segment,
    tol: Real,
) -> Option<Entity> {
    let a_in = ray.contains_point(&segment.a, tol);
    let b_in = ray.contains_point(&segment.b, tol);

    match (a_in, b_in) {
        (true, true) => Some(Entity::Segment(*segment)),
        (true, false) => Some(segment_or_point(ray.origin, segment.a, tol)),
        (false, true) => Some(segment_or_point(ray.origin, segment.b, tol)),
        (false, false) => None,
    }
}

/// Intersection between two segments known to be collinear.
///
/// The overlap is determined from which endpoints of each segment lie inside the other.
/// Each membership is one decimal digit of a code read, from the most significant digit,
/// as: `s0.a` in `s1`, `s0.b` in `s1`, `s1.a` in `s0`, `s1.b` in `s0`.
pub fn intersection_collinear_segment_segment(
    s0: &Segment,
    s1: &Segment,
    tol: Real,
) -> Option<Entity> {
    let inside = |s: &Segment, pt: &Point<Real>| s.contains_point(pt, tol) as u16;
    let code = inside(s0, &s1.b)
        + 10 * inside(s0, &s1.a)
        + 100 * inside(s1, &s0.b)
        + 1000 * inside(s1, &s0.a);

    match code {
        // s0 lies inside s1.
        1111 | 1101 | 1110 | 1100 => Some(Entity::Segment(*s0)),
        // s1 lies inside s0.
        111 | 1011 | 11 => Some(Entity::Segment(*s1)),
        101 => Some(segment_or_point(s0.b, s1.b, tol)),
        110 => Some(segment_or_point(s0.b, s1.a, tol)),
        1001 => Some(segment_or_point(s0.a, s1.b, tol)),
        1010 => Some(segment_or_point(s0.a, s1.a, tol)),
        0 => None,
        _ => {
            log::warn!(
                "Inconsistent endpoint memberships {:04} between collinear segments {:?} and {:?}.",
                code,
                s0,
                s1
            );
            None
        }
    }
}
