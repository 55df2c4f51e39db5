use super::intersection_collinear::intersection_collinear;
use super::intersection_coplanar::{
    intersection_coplanar_linear_disk, intersection_coplanar_linear_linear,
    intersection_coplanar_linear_triangle,
};
use super::intersection_linear::{
    intersection_linear_ball, intersection_linear_disk, intersection_linear_plane,
    intersection_linear_triangle,
};
use super::intersection_planar::{
    intersection_disk_disk, intersection_plane_ball, intersection_plane_disk,
    intersection_plane_plane, intersection_plane_triangle, intersection_triangle_disk,
    intersection_triangle_triangle,
};
use super::intersection_point::intersection_point_entity;
use super::linear::Linear;
use crate::math::{Point, Real};
use crate::query::predicates::{
    linear_collinear, linear_coplanar, linear_plane_coplanar, planes_coplanar,
    vectors_parallel,
};
use crate::query::Unsupported;
use crate::shape::{Ball, Disk, Entity, Plane, Triangle};

/// The families of entities the intersection engine distinguishes.
enum Family<'a> {
    Empty,
    Point(&'a Point<Real>),
    Linear(Linear),
    Plane(&'a Plane),
    Triangle(&'a Triangle),
    Disk(&'a Disk),
    Ball(&'a Ball),
}

impl<'a> Family<'a> {
    fn of(entity: &'a Entity) -> Self {
        match entity {
            Entity::Empty => Family::Empty,
            Entity::Point(p) => Family::Point(p),
            Entity::Line(l) => Family::Linear(Linear::from_line(l)),
            Entity::Ray(r) => Family::Linear(Linear::from_ray(r)),
            Entity::Segment(s) => Family::Linear(Linear::from_segment(s)),
            Entity::Plane(p) => Family::Plane(p),
            Entity::Triangle(t) => Family::Triangle(t),
            Entity::Disk(d) => Family::Disk(d),
            Entity::Ball(b) => Family::Ball(b),
        }
    }
}

/// Computes the intersection between two entities.
///
/// Returns `Ok(None)` if the entities do not intersect, and `Ok(Some(entity))` with the
/// shared entity otherwise. Degenerate overlaps collapse to lower dimensional entities: a
/// segment shorter than `tol` becomes a point, and a plane tangent to a ball touches it
/// at a single point.
///
/// The pairs whose intersection is not representable by a single entity result in
/// [`Unsupported`]: a ball with a triangle, a disk, or another ball, and two triangles
/// or disks laying on a common plane.
///
/// # Example
///
/// ```
/// use envelope3d::math::{Point, Vector, DEFAULT_EPSILON};
/// use envelope3d::query;
/// use envelope3d::shape::{Entity, Line, Plane};
///
/// let plane = Entity::from(Plane::new(Point::origin(), Vector::z()));
/// let line = Entity::from(Line::new(Point::new(1.0, 2.0, 3.0), Vector::z()));
///
/// let hit = query::intersection(&line, &plane, DEFAULT_EPSILON).unwrap();
/// assert_eq!(hit, Some(Entity::Point(Point::new(1.0, 2.0, 0.0))));
/// ```
pub fn intersection(e1: &Entity, e2: &Entity, tol: Real) -> Result<Option<Entity>, Unsupported> {
    let unsupported = Unsupported::new(e1.entity_type(), e2.entity_type());

    let res = match (Family::of(e1), Family::of(e2)) {
        (Family::Empty, _) | (_, Family::Empty) => None,
        (Family::Point(pt), _) => intersection_point_entity(pt, e2, tol),
        (_, Family::Point(pt)) => intersection_point_entity(pt, e1, tol),
        (Family::Linear(l1), Family::Linear(l2)) => linear_linear(&l1, &l2, tol),
        (Family::Linear(l), Family::Plane(p)) | (Family::Plane(p), Family::Linear(l)) => {
            if linear_plane_coplanar(&l.origin, &l.direction, p, tol) {
                Some(l.to_entity())
            } else {
                intersection_linear_plane(&l, p, tol).map(Entity::Point)
            }
        }
        (Family::Linear(l), Family::Triangle(t)) | (Family::Triangle(t), Family::Linear(l)) => {
            if linear_plane_coplanar(&l.origin, &l.direction, &t.laying_plane(), tol) {
                intersection_coplanar_linear_triangle(&l, t, tol)
            } else {
                intersection_linear_triangle(&l, t, tol).map(|(_, pt)| Entity::Point(pt))
            }
        }
        (Family::Linear(l), Family::Disk(d)) | (Family::Disk(d), Family::Linear(l)) => {
            if linear_plane_coplanar(&l.origin, &l.direction, &d.plane, tol) {
                intersection_coplanar_linear_disk(&l, d, tol)
            } else {
                intersection_linear_disk(&l, d, tol).map(Entity::Point)
            }
        }
        (Family::Linear(l), Family::Ball(b)) | (Family::Ball(b), Family::Linear(l)) => {
            intersection_linear_ball(&l, b, tol)
        }
        (Family::Plane(p1), Family::Plane(p2)) => {
            if planes_coplanar(p1, p2, tol) {
                Some(Entity::Plane(*p1))
            } else if vectors_parallel(&p1.normal, &p2.normal, tol) {
                None
            } else {
                intersection_plane_plane(p1, p2, tol).map(Entity::Line)
            }
        }
        (Family::Plane(p), Family::Triangle(t)) | (Family::Triangle(t), Family::Plane(p)) => {
            if planes_coplanar(p, &t.laying_plane(), tol) {
                Some(Entity::Triangle(*t))
            } else {
                intersection_plane_triangle(p, t, tol)
            }
        }
        (Family::Plane(p), Family::Disk(d)) | (Family::Disk(d), Family::Plane(p)) => {
            if planes_coplanar(p, &d.plane, tol) {
                Some(Entity::Disk(*d))
            } else {
                intersection_plane_disk(p, d, tol)
            }
        }
        (Family::Plane(p), Family::Ball(b)) | (Family::Ball(b), Family::Plane(p)) => {
            intersection_plane_ball(p, b, tol)
        }
        (Family::Triangle(t1), Family::Triangle(t2)) => {
            if planes_coplanar(&t1.laying_plane(), &t2.laying_plane(), tol) {
                return Err(unsupported);
            }
            intersection_triangle_triangle(t1, t2, tol)
        }
        (Family::Triangle(t), Family::Disk(d)) | (Family::Disk(d), Family::Triangle(t)) => {
            if planes_coplanar(&t.laying_plane(), &d.plane, tol) {
                return Err(unsupported);
            }
            intersection_triangle_disk(t, d, tol)
        }
        (Family::Disk(d1), Family::Disk(d2)) => {
            if planes_coplanar(&d1.plane, &d2.plane, tol) {
                return Err(unsupported);
            }
            intersection_disk_disk(d1, d2, tol)
        }
        (Family::Triangle(_) | Family::Disk(_) | Family::Ball(_), Family::Ball(_))
        | (Family::Ball(_), Family::Triangle(_) | Family::Disk(_)) => return Err(unsupported),
    };

    Ok(res)
}

fn linear_linear(l1: &Linear, l2: &Linear, tol: Real) -> Option<Entity> {
    if linear_collinear(&l1.origin, &l1.direction, &l2.origin, &l2.direction, tol) {
        intersection_collinear(l1, l2, tol)
    } else if linear_coplanar(&l1.origin, &l1.direction, &l2.origin, &l2.direction, tol) {
        intersection_coplanar_linear_linear(l1, l2, tol)
    } else {
        None
    }
}
