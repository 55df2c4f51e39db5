use crate::math::{Point, Real};
use crate::shape::Entity;

/// Intersection between a point and any entity: the point itself if the entity contains
/// it within `tol`.
pub fn intersection_point_entity(pt: &Point<Real>, entity: &Entity, tol: Real) -> Option<Entity> {
    let contained = match entity {
        Entity::Empty => false,
        Entity::Point(other) => (pt - other).norm() <= tol,
        Entity::Line(line) => line.contains_point(pt, tol),
        Entity::Ray(ray) => ray.contains_point(pt, tol),
        Entity::Plane(plane) => plane.contains_point(pt, tol),
        Entity::Segment(segment) => segment.contains_point(pt, tol),
        Entity::Triangle(triangle) => triangle.contains_point(pt, tol),
        Entity::Disk(disk) => disk.contains_point(pt, tol),
        Entity::Ball(ball) => ball.contains_point(pt, tol),
    };

    contained.then_some(Entity::Point(*pt))
}
