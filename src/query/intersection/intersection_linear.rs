use super::linear::Linear;
use crate::math::{Point, Real};
use crate::shape::{Ball, Disk, Entity, Plane, Ray, Triangle};

/// Intersection point between a line-like entity and a plane it is not parallel to.
pub fn intersection_linear_plane(
    linear: &Linear,
    plane: &Plane,
    tol: Real,
) -> Option<Point<Real>> {
    let det = plane.normal.dot(&linear.direction);

    if det.abs() <= tol * linear.direction.norm() {
        return None;
    }

    let t = (plane.origin - linear.origin).dot(&plane.normal) / det;
    linear.admits(t, tol).then(|| linear.point_at(t))
}

/// Intersection between a line-like entity and a triangle it is not coplanar with.
///
/// Returns the parameter of the hit along `linear`, and the hit point itself.
pub fn intersection_linear_triangle(
    linear: &Linear,
    triangle: &Triangle,
    tol: Real,
) -> Option<(Real, Point<Real>)> {
    let ab = triangle.b - triangle.a;
    let ac = triangle.c - triangle.a;
    let h = linear.direction.cross(&ac);
    let det = ab.dot(&h);

    // `det` is the cosine between `direction` and the triangle normal, scaled by
    // `|direction|` and twice the triangle area.
    if det.abs() <= tol * linear.direction.norm() * ab.cross(&ac).norm() {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = linear.origin - triangle.a;
    let u = inv_det * s.dot(&h);

    if u < -tol || u > 1.0 + tol {
        return None;
    }

    let q = s.cross(&ab);
    let v = inv_det * linear.direction.dot(&q);

    if v < -tol || u + v > 1.0 + tol {
        return None;
    }

    let t = inv_det * ac.dot(&q);
    linear.admits(t, tol).then(|| (t, linear.point_at(t)))
}

/// Computes the first hit between a ray and a triangle.
///
/// Returns the time of impact `t` such that the hit point is `ray.origin + t * ray.direction`.
///
/// # Example
///
/// ```
/// use envelope3d::math::{Point, Vector};
/// use envelope3d::query::intersection::ray_triangle;
/// use envelope3d::shape::{Ray, Triangle};
///
/// let tri = Triangle::new(
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// );
/// let ray = Ray::new(Point::new(0.25, 0.25, 2.0), -Vector::z());
/// let (toi, pt) = ray_triangle(&ray, &tri, 1.0e-7).unwrap();
///
/// assert!((toi - 2.0).abs() < 1.0e-12);
/// assert!((pt - Point::new(0.25, 0.25, 0.0)).norm() < 1.0e-12);
/// ```
#[inline]
pub fn ray_triangle(ray: &Ray, triangle: &Triangle, tol: Real) -> Option<(Real, Point<Real>)> {
    intersection_linear_triangle(&Linear::from_ray(ray), triangle, tol)
}

/// Intersection point between a line-like entity and a disk it is not coplanar with.
pub fn intersection_linear_disk(
    linear: &Linear,
    disk: &Disk,
    tol: Real,
) -> Option<Point<Real>> {
    let pt = intersection_linear_plane(linear, &disk.plane, tol)?;
    disk.contains_point(&pt, tol).then_some(pt)
}

/// Intersection between a line-like entity and a ball.
///
/// The result is the chord of the ball, clipped to the parameter range of `linear`, or a
/// point if the line is tangent to the ball, i.e. if its distance to the center is within
/// `tol` of the radius.
pub fn intersection_linear_ball(linear: &Linear, ball: &Ball, tol: Real) -> Option<Entity> {
    linear_chord(linear, &ball.center, ball.radius, tol)
}

/// Cuts the supporting line of `linear` by the sphere of radius `radius` around `center`.
pub(crate) fn linear_chord(
    linear: &Linear,
    center: &Point<Real>,
    radius: Real,
    tol: Real,
) -> Option<Entity> {
    let dir_norm = linear.direction.norm();
    let u = linear.direction / dir_norm;
    let oc = linear.origin - center;
    let b = oc.dot(&u);
    let dist = (oc.norm_squared() - b * b).max(0.0).sqrt();

    if (dist - radius).abs() <= tol {
        let t = -b / dir_norm;
        return linear
            .admits(t, tol)
            .then(|| Entity::Point(linear.point_at(t)));
    }

    if dist > radius {
        return None;
    }

    let half = ((radius + dist) * (radius - dist)).sqrt();
    linear.clip((-b - half) / dir_norm, (-b + half) / dir_norm, tol)
}
