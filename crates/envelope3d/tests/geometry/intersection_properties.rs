use approx::assert_relative_eq;
use envelope3d::math::{Point, Real, Vector, DEFAULT_EPSILON};
use envelope3d::query::{self, is_collinear};
use envelope3d::shape::{Ball, Entity, Line, Plane, Ray, Segment, Triangle};

const TOL: Real = DEFAULT_EPSILON;

fn segment(a: Real, b: Real) -> Entity {
    Segment::new(Point::new(a, 0.0, 0.0), Point::new(b, 0.0, 0.0)).into()
}

#[test]
fn collinear_lines_with_opposite_directions() {
    let origin = Point::new(1.0, -2.0, 0.5);
    let dir = Vector::new(1.0, 2.0, -1.0);
    let x = Entity::from(Line::new(origin, dir));
    let y = Entity::from(Line::new(origin, -dir));

    assert!(is_collinear(&x, &y, TOL).unwrap());
    let shared = query::intersection(&x, &y, TOL).unwrap().unwrap();
    assert!(shared.relative_eq(&x, TOL));
}

#[test]
fn ray_through_triangle_centroid() {
    let tri = Triangle::new(
        Point::new(0.3, -1.0, 2.0),
        Point::new(2.0, 0.5, 1.0),
        Point::new(-0.5, 1.5, 1.5),
    );
    let centroid = tri.centroid();
    let normal = tri.normal().unwrap().into_inner();
    let ray = Ray::new(centroid - normal * 3.0, normal);

    let (t, pt) = query::ray_triangle(&ray, &tri, TOL).unwrap();
    assert!(t > 0.0);
    assert_relative_eq!(pt, centroid, epsilon = 1.0e-9);

    let hit = query::intersection(&ray.into(), &tri.into(), TOL).unwrap();
    assert_eq!(hit.map(|e| e.relative_eq(&Entity::Point(centroid), 1.0e-9)), Some(true));
}

#[test]
fn line_through_ball_center() {
    let ball = Ball::new(1.5, Point::new(0.5, 1.0, -2.0));
    let line = Line::new(ball.center + Vector::new(3.0, 1.0, 2.0), Vector::new(-3.0, -1.0, -2.0));

    let chord = match query::intersection(&line.into(), &ball.into(), TOL).unwrap() {
        Some(Entity::Segment(chord)) => chord,
        other => panic!("expected a chord, got {:?}", other),
    };

    assert_relative_eq!((chord.a - ball.center).norm(), ball.radius, epsilon = 1.0e-9);
    assert_relative_eq!((chord.b - ball.center).norm(), ball.radius, epsilon = 1.0e-9);
    assert_relative_eq!(chord.centroid(), ball.center, epsilon = 1.0e-9);
}

#[test]
fn plane_cuts_ball_along_a_circle() {
    let ball = Ball::new(2.0, Point::new(0.0, 0.0, 1.0));
    let plane = Plane::new(Point::origin(), Vector::z());

    match query::intersection(&plane.into(), &ball.into(), TOL).unwrap() {
        Some(Entity::Disk(disk)) => {
            assert_relative_eq!(disk.radius, 3.0_f64.sqrt(), epsilon = 1.0e-12);
            assert_relative_eq!(disk.center(), Point::origin(), epsilon = 1.0e-12);
        }
        other => panic!("expected a disk, got {:?}", other),
    }

    let tangent = Plane::new(Point::new(0.0, 0.0, 3.0), Vector::z());
    assert_eq!(
        query::intersection(&tangent.into(), &ball.into(), TOL).unwrap(),
        Some(Entity::Point(Point::new(0.0, 0.0, 3.0)))
    );
}

#[test]
fn collinear_segment_overlaps() {
    let cases = [
        // Identical.
        ((0.0, 2.0), (0.0, 2.0), Some(segment(0.0, 2.0))),
        // The second contains the first.
        ((0.5, 1.5), (0.0, 2.0), Some(segment(0.5, 1.5))),
        // The first contains the second.
        ((0.0, 2.0), (0.5, 1.5), Some(segment(0.5, 1.5))),
        // Partial overlap.
        ((0.0, 2.0), (1.0, 3.0), Some(segment(1.0, 2.0))),
        ((1.0, 3.0), (0.0, 2.0), Some(segment(1.0, 2.0))),
        // Touching endpoints.
        ((0.0, 1.0), (1.0, 2.0), Some(Entity::Point(Point::new(1.0, 0.0, 0.0)))),
        // Disjoint.
        ((0.0, 1.0), (2.0, 3.0), None),
    ];

    for ((a0, a1), (b0, b1), expected) in cases {
        let res = query::intersection(&segment(a0, a1), &segment(b0, b1), TOL).unwrap();

        match (&res, &expected) {
            (Some(Entity::Segment(s)), Some(Entity::Segment(e))) => {
                let same = (s.a - e.a).norm() < 1.0e-12 && (s.b - e.b).norm() < 1.0e-12;
                let swapped = (s.a - e.b).norm() < 1.0e-12 && (s.b - e.a).norm() < 1.0e-12;
                assert!(same || swapped, "{:?} vs {:?}", res, expected);
            }
            _ => assert_eq!(res, expected),
        }
    }
}

#[test]
fn intersection_is_symmetric() {
    let entities: Vec<Entity> = vec![
        Line::new(Point::new(0.2, 0.1, -1.0), Vector::z()).into(),
        Ray::new(Point::new(0.2, 0.1, 5.0), -Vector::z()).into(),
        Segment::new(Point::new(-1.0, 0.1, 0.0), Point::new(1.0, 0.1, 0.0)).into(),
        Plane::new(Point::origin(), Vector::new(0.0, 1.0, 1.0)).into(),
        Triangle::new(
            Point::new(-1.0, -1.0, 0.0),
            Point::new(1.0, -1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        )
        .into(),
        Ball::new(0.5, Point::new(0.2, 0.1, 0.0)).into(),
    ];

    for a in &entities {
        for b in &entities {
            let (ab, ba) = (query::intersection(a, b, TOL), query::intersection(b, a, TOL));
            assert_eq!(ab.is_ok(), ba.is_ok());

            if let (Ok(Some(ab)), Ok(Some(ba))) = (ab, ba) {
                if ab.entity_type() == ba.entity_type() && ab.aabb().is_some() {
                    let (x, y) = (ab.aabb().unwrap(), ba.aabb().unwrap());
                    assert_relative_eq!(x.mins, y.mins, epsilon = 1.0e-9);
                    assert_relative_eq!(x.maxs, y.maxs, epsilon = 1.0e-9);
                }
            }
        }
    }
}
