use envelope3d::bounding_volume::{Aabb, BoundingVolume};
use envelope3d::collection::{pair_index, Collection};
use envelope3d::math::{Point, Real, Vector, DEFAULT_EPSILON};
use envelope3d::query;
use envelope3d::shape::{Entity, Segment, Triangle};
use oorandom::Rand64;

fn random_point(rng: &mut Rand64, center: &Point<Real>, spread: Real) -> Point<Real> {
    let mut coord = || (rng.rand_float() - 0.5) * spread;
    center + Vector::new(coord(), coord(), coord())
}

fn random_center(rng: &mut Rand64) -> Point<Real> {
    random_point(rng, &Point::origin(), 20.0)
}

fn segments(rng: &mut Rand64, n: usize) -> Collection {
    let mut collection = Collection::new();
    for _ in 0..n {
        let c = random_center(rng);
        collection.push(Segment::new(random_point(rng, &c, 4.0), random_point(rng, &c, 4.0)));
    }
    collection
}

fn triangles(rng: &mut Rand64, n: usize) -> Collection {
    let mut collection = Collection::new();
    for _ in 0..n {
        let c = random_center(rng);
        collection.push(Triangle::new(
            random_point(rng, &c, 5.0),
            random_point(rng, &c, 5.0),
            random_point(rng, &c, 5.0),
        ));
    }
    collection
}

fn boxes(collection: &Collection) -> Vec<Aabb> {
    collection.iter().map(|e| e.aabb().unwrap()).collect()
}

fn brute_force_pairs(a: &Collection, b: &Collection) -> Vec<(usize, usize)> {
    let (boxes_a, boxes_b) = (boxes(a), boxes(b));
    let mut pairs = Vec::new();

    for (i, box_a) in boxes_a.iter().enumerate() {
        for (j, box_b) in boxes_b.iter().enumerate() {
            if box_a.intersects(box_b) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}

#[test]
fn candidates_match_brute_force() {
    let mut rng = Rand64::new(42);

    for _ in 0..10 {
        let mut a = segments(&mut rng, 60);
        let mut b = triangles(&mut rng, 40);
        a.build_spatial_index().unwrap();
        b.build_spatial_index().unwrap();

        let mut candidates = a.intersection_candidates(&b);
        candidates.sort_unstable();
        assert_eq!(candidates, brute_force_pairs(&a, &b));
    }
}

#[test]
fn self_candidates_contain_the_diagonal() {
    let mut rng = Rand64::new(7);
    let mut a = triangles(&mut rng, 50);
    a.build_spatial_index().unwrap();

    let mut candidates = a.intersection_candidates(&a);
    candidates.sort_unstable();

    assert!((0..a.len()).all(|i| candidates.binary_search(&(i, i)).is_ok()));
    assert_eq!(candidates, brute_force_pairs(&a, &a));
}

#[test]
fn aabb_queries_match_brute_force() {
    let mut rng = Rand64::new(3);
    let mut a = triangles(&mut rng, 80);
    a.build_spatial_index().unwrap();
    let all = boxes(&a);

    for _ in 0..20 {
        let c = random_center(&mut rng);
        let query = Aabb::from_half_extents(c, Vector::repeat(3.0));
        let expected: Vec<_> = (0..a.len()).filter(|i| all[*i].intersects(&query)).collect();
        assert_eq!(a.intersection_with_aabb(&query), expected);
    }
}

#[test]
fn narrow_phase_keeps_the_intersecting_pairs() {
    let mut rng = Rand64::new(1234);
    let mut a = segments(&mut rng, 80);
    let mut b = triangles(&mut rng, 80);
    a.build_spatial_index().unwrap();
    b.build_spatial_index().unwrap();

    let mut found = a.intersection(&b, DEFAULT_EPSILON).unwrap();
    found.sort_unstable_by_key(|(i, j, _)| (*i, *j));

    let mut expected = Vec::new();
    for (i, ea) in a.iter().enumerate() {
        for (j, eb) in b.iter().enumerate() {
            if let Some(shared) = query::intersection(ea, eb, DEFAULT_EPSILON).unwrap() {
                expected.push((i, j, shared));
            }
        }
    }

    assert_eq!(found, expected);
    assert!(found.iter().all(|(_, _, e)| matches!(e, Entity::Point(_))));
}

#[test]
fn dense_self_intersection_agrees_with_pairwise_queries() {
    let mut rng = Rand64::new(99);
    let a = segments(&mut rng, 12);
    let n = a.len();
    let dense = a.self_intersection(DEFAULT_EPSILON).unwrap();

    assert_eq!(dense.len(), n * (n - 1) / 2);

    for i in 0..n {
        for j in i + 1..n {
            let (ei, ej) = (a.get(i).unwrap(), a.get(j).unwrap());
            let expected = query::intersection(ei, ej, DEFAULT_EPSILON)
                .unwrap()
                .unwrap_or_default();
            assert_eq!(dense[pair_index(i, j, n)], expected);
        }
    }
}
