use super::intersection_collinear::intersection_collinear_segment_segment;
use super::intersection_coplanar::{
    intersection_coplanar_linear_disk, intersection_coplanar_linear_triangle,
};
use super::linear::Linear;
use crate::math::{Point, Real};
use crate::shape::{Ball, Disk, Entity, Line, Plane, Triangle};

/// The line shared by two non-parallel planes.
pub fn intersection_plane_plane(p1: &Plane, p2: &Plane, tol: Real) -> Option<Line> {
    let dir = p1.normal.cross(&p2.normal);

    // The normals are unit vectors, so `|dir|` is the sine of their angle.
    if dir.norm() <= tol {
        return None;
    }

    let dot = p1.normal.dot(&p2.normal);
    let inv_det = 1.0 / (1.0 - dot * dot);
    let d1 = p1.d();
    let d2 = p2.d();
    let c1 = (d1 - dot * d2) * inv_det;
    let c2 = (d2 - dot * d1) * inv_det;
    let origin = Point::from(p1.normal * c1 + p2.normal * c2);

    Some(Line::new(origin, dir))
}

/// The single point shared by three planes, if their normals are linearly independent.
pub fn intersection_plane_plane_plane(
    p1: &Plane,
    p2: &Plane,
    p3: &Plane,
    tol: Real,
) -> Option<Point<Real>> {
    let n23 = p2.normal.cross(&p3.normal);
    let det = p1.normal.dot(&n23);

    if det.abs() <= tol {
        return None;
    }

    let n31 = p3.normal.cross(&p1.normal);
    let n12 = p1.normal.cross(&p2.normal);
    Some(Point::from(
        (n23 * p1.d() + n31 * p2.d() + n12 * p3.d()) / det,
    ))
}

/// Intersection between a plane and a triangle that does not lay on it.
///
/// The result is the segment of the triangle crossed by the plane, or a point if the
/// plane only touches a vertex.
pub fn intersection_plane_triangle(
    plane: &Plane,
    triangle: &Triangle,
    tol: Real,
) -> Option<Entity> {
    let line = intersection_plane_plane(plane, &triangle.laying_plane(), tol)?;
    intersection_coplanar_linear_triangle(&Linear::from_line(&line), triangle, tol)
}

/// Intersection between a plane and a disk that does not lay on it.
pub fn intersection_plane_disk(plane: &Plane, disk: &Disk, tol: Real) -> Option<Entity> {
    let line = intersection_plane_plane(plane, &disk.plane, tol)?;
    intersection_coplanar_linear_disk(&Linear::from_line(&line), disk, tol)
}

/// Intersection between a plane and a ball.
///
/// The result is the disk cut from the ball by the plane, or a point if the plane is
/// tangent to the ball.
pub fn intersection_plane_ball(plane: &Plane, ball: &Ball, tol: Real) -> Option<Entity> {
    let sd = plane.signed_distance(&ball.center);

    if sd.abs() > ball.radius + tol {
        return None;
    }

    let center = ball.center - plane.normal * sd;

    if (ball.radius - sd.abs()).abs() <= tol {
        return Some(Entity::Point(center));
    }

    let radius = ((ball.radius + sd) * (ball.radius - sd)).sqrt();
    Some(Entity::Disk(Disk::new(radius, center, plane.normal)))
}

/// Intersection between two triangles that do not lay on a common plane.
///
/// Each triangle is cut by the plane of the other, and both cuts, laying on the same line,
/// are overlapped.
pub fn intersection_triangle_triangle(
    t1: &Triangle,
    t2: &Triangle,
    tol: Real,
) -> Option<Entity> {
    let cut2 = intersection_plane_triangle(&t1.laying_plane(), t2, tol)?;
    let cut1 = intersection_plane_triangle(&t2.laying_plane(), t1, tol)?;
    overlap_on_line(&cut1, &cut2, tol)
}

/// Intersection between a triangle and a disk that do not lay on a common plane.
pub fn intersection_triangle_disk(triangle: &Triangle, disk: &Disk, tol: Real) -> Option<Entity> {
    match intersection_plane_triangle(&disk.plane, triangle, tol)? {
        Entity::Point(pt) => disk.contains_point(&pt, tol).then_some(Entity::Point(pt)),
        Entity::Segment(seg) => {
            intersection_coplanar_linear_disk(&Linear::from_segment(&seg), disk, tol)
        }
        _ => None,
    }
}

/// Intersection between two disks that do not lay on a common plane.
pub fn intersection_disk_disk(d1: &Disk, d2: &Disk, tol: Real) -> Option<Entity> {
    let cut2 = intersection_plane_disk(&d1.plane, d2, tol)?;
    let cut1 = intersection_plane_disk(&d2.plane, d1, tol)?;
    overlap_on_line(&cut1, &cut2, tol)
}

/// Overlap between two points or segments laying on a common line.
fn overlap_on_line(e1: &Entity, e2: &Entity, tol: Real) -> Option<Entity> {
    match (e1, e2) {
        (Entity::Point(a), Entity::Point(b)) => {
            ((a - b).norm() <= tol).then_some(Entity::Point(*a))
        }
        (Entity::Point(pt), Entity::Segment(seg)) | (Entity::Segment(seg), Entity::Point(pt)) => {
            seg.contains_point(pt, tol).then_some(Entity::Point(*pt))
        }
        (Entity::Segment(s1), Entity::Segment(s2)) => {
            intersection_collinear_segment_segment(s1, s2, tol)
        }
        _ => None,
    }
}
