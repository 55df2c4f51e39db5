//! A bulk container of entities with a derived spatial index.

use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::partitioning::AabbTree;
use crate::query::{self, Unsupported};
use crate::shape::{Entity, EntityType};
use crate::utils::PointMap;
use alloc::vec::Vec;

/// Error raised while building the spatial index of a [`Collection`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An entity has no finite extent (a line, a ray, a plane, or the empty entity), so it
    /// cannot be bounded by a box.
    #[error("entity {index} of type {kind:?} cannot be bounded by an AABB")]
    Unboundable {
        /// The index of the entity in the collection.
        index: usize,
        /// The type of the entity.
        kind: EntityType,
    },
}

/// An ordered list of entities, and an AABB tree over their boxes.
///
/// The tree is a cache derived from the entities: every mutation of the collection drops
/// it, and [`Collection::build_spatial_index`] must be called again before the
/// tree-based queries report anything.
///
/// The `id` of each box of the tree is the index of the entity it bounds.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    entities: Vec<Entity>,
    tree: Option<AabbTree>,
}

impl Collection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection of the given entities, without spatial index.
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Collection {
            entities,
            tree: None,
        }
    }

    /// The number of entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Is this collection empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The entity at index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Entity> {
        self.entities.get(i)
    }

    /// The entities of this collection, in order.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterates through the entities of this collection.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// The spatial index, if it was built since the last mutation.
    #[inline]
    pub fn tree(&self) -> Option<&AabbTree> {
        self.tree.as_ref()
    }

    /// Appends an entity.
    pub fn push(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
        self.tree = None;
    }

    /// Removes and returns the entity at index `i`, shifting the following ones.
    pub fn remove(&mut self, i: usize) -> Entity {
        self.tree = None;
        self.entities.remove(i)
    }

    /// Removes every entity.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.tree = None;
    }

    /// Translates every entity by `v`.
    pub fn translate(&mut self, v: &Vector<Real>) {
        for entity in &mut self.entities {
            *entity = entity.translated(v);
        }
        self.tree = None;
    }

    /// Maps every entity by the rigid or affine transformation `m`.
    pub fn transform(&mut self, m: &impl PointMap) {
        for entity in &mut self.entities {
            *entity = entity.transformed(m);
        }
        self.tree = None;
    }

    /// The number of entities of the given type.
    pub fn count(&self, kind: EntityType) -> usize {
        self.iter().filter(|e| e.entity_type() == kind).count()
    }

    /// Does this collection contain an entity of the given type?
    pub fn contains_type(&self, kind: EntityType) -> bool {
        self.iter().any(|e| e.entity_type() == kind)
    }

    /// Are all the entities of the given type?
    pub fn are_all(&self, kind: EntityType) -> bool {
        self.iter().all(|e| e.entity_type() == kind)
    }

    /// Removes every entity of the given type.
    pub fn remove_type(&mut self, kind: EntityType) {
        self.entities.retain(|e| e.entity_type() != kind);
        self.tree = None;
    }

    /// The number of degenerate entities.
    pub fn count_degenerate(&self, tol: Real) -> usize {
        self.iter().filter(|e| e.is_degenerate(tol)).count()
    }

    /// Does this collection contain a degenerate entity?
    pub fn contains_degenerate(&self, tol: Real) -> bool {
        self.iter().any(|e| e.is_degenerate(tol))
    }

    /// Removes every degenerate entity.
    pub fn remove_degenerate(&mut self, tol: Real) {
        self.entities.retain(|e| !e.is_degenerate(tol));
        self.tree = None;
    }

    /// Builds the AABB tree over the boxes of every entity.
    ///
    /// Fails, leaving the collection without index, if any entity cannot be bounded.
    pub fn build_spatial_index(&mut self) -> Result<(), CollectionError> {
        self.tree = None;

        let boxes = self
            .entities
            .iter()
            .enumerate()
            .map(|(index, entity)| {
                entity
                    .aabb()
                    .map(|aabb| aabb.with_ids(index, index))
                    .ok_or(CollectionError::Unboundable {
                        index,
                        kind: entity.entity_type(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.tree = Some(AabbTree::from_boxes(&boxes));
        Ok(())
    }

    /// The pairs `(i, j)` of entities of `self` and `other` whose boxes overlap.
    ///
    /// Empty if either collection has no spatial index.
    pub fn intersection_candidates(&self, other: &Collection) -> Vec<(usize, usize)> {
        match &other.tree {
            Some(tree) => self.intersection_with_tree(tree),
            None => Vec::new(),
        }
    }

    /// The pairs `(i, j)` of entities of `self` and of leaves of `tree` whose boxes
    /// overlap. `j` is the `id` of the leaf box.
    pub fn intersection_with_tree(&self, tree: &AabbTree) -> Vec<(usize, usize)> {
        match &self.tree {
            Some(own) => own.intersection_pairs(tree),
            None => Vec::new(),
        }
    }

    /// The entities whose box overlaps `aabb`, in increasing order.
    pub fn intersection_with_aabb(&self, aabb: &Aabb) -> Vec<usize> {
        let mut out = Vec::new();

        if let Some(tree) = &self.tree {
            tree.intersect_aabb(aabb, &mut |leaf| out.push(leaf.id));
            out.sort_unstable();
        }

        out
    }

    /// Computes the intersection between every pair of candidate entities of `self` and
    /// `other`.
    ///
    /// The result lists the pairs `(i, j, shared)` that actually intersect. Pairs that
    /// overlap in the broad phase only are discarded.
    pub fn intersection(
        &self,
        other: &Collection,
        tol: Real,
    ) -> Result<Vec<(usize, usize, Entity)>, Unsupported> {
        let mut out = Vec::new();

        for (i, j) in self.intersection_candidates(other) {
            if let Some(shared) = query::intersection(&self.entities[i], &other.entities[j], tol)? {
                out.push((i, j, shared));
            }
        }

        Ok(out)
    }

    /// Computes the intersection between every unordered pair of entities of `self`.
    ///
    /// The result is dense: it has one entry per pair `i < j`, in row-major order, with
    /// [`Entity::Empty`] for the pairs that do not intersect. Use [`pair_index`] to find
    /// the entry of a given pair.
    pub fn self_intersection(&self, tol: Real) -> Result<Vec<Entity>, Unsupported> {
        let n = self.len();
        let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for i in 0..n {
            for j in i + 1..n {
                let shared = query::intersection(&self.entities[i], &self.entities[j], tol)?;
                out.push(shared.unwrap_or_default());
            }
        }

        Ok(out)
    }
}

/// The index of the pair `(i, j)`, with `i < j < n`, in the result of
/// [`Collection::self_intersection`] over `n` entities.
#[inline]
pub fn pair_index(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i < j && j < n);
    i * n - i * (i + 1) / 2 + (j - i - 1)
}

#[cfg(test)]
mod test {
    use super::{pair_index, Collection, CollectionError};
    use crate::bounding_volume::Aabb;
    use crate::math::{Isometry, Point, Vector, DEFAULT_EPSILON};
    use crate::shape::{Ball, Entity, EntityType, Line, Plane, Segment, Triangle};

    fn segments() -> Collection {
        Collection::from_entities(vec![
            Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)).into(),
            Segment::new(Point::new(0.0, -1.0, 0.0), Point::new(0.0, 1.0, 0.0)).into(),
            Segment::new(Point::new(5.0, 5.0, 5.0), Point::new(6.0, 6.0, 6.0)).into(),
        ])
    }

    #[test]
    fn pair_index_is_row_major() {
        let n = 5;
        let mut k = 0;
        for i in 0..n {
            for j in i + 1..n {
                assert_eq!(pair_index(i, j, n), k);
                k += 1;
            }
        }
    }

    #[test]
    fn unboundable_entities_fail_the_build() {
        let mut coll = segments();
        coll.push(Line::new(Point::origin(), Vector::x()));
        assert_eq!(
            coll.build_spatial_index(),
            Err(CollectionError::Unboundable {
                index: 3,
                kind: EntityType::Line
            })
        );
        assert!(coll.tree().is_none());

        coll.remove_type(EntityType::Line);
        assert!(coll.build_spatial_index().is_ok());
        assert_eq!(coll.tree().map(|t| t.leaf_count()), Some(3));
    }

    #[test]
    fn mutations_invalidate_the_tree() {
        let mut coll = segments();
        coll.build_spatial_index().unwrap();
        coll.translate(&Vector::z());
        assert!(coll.tree().is_none());

        coll.build_spatial_index().unwrap();
        coll.transform(&Isometry::translation(1.0, 0.0, 0.0));
        assert!(coll.tree().is_none());

        coll.build_spatial_index().unwrap();
        let _ = coll.remove(0);
        assert!(coll.tree().is_none());
    }

    #[test]
    fn dense_self_intersection() {
        let coll = segments();
        let res = coll.self_intersection(DEFAULT_EPSILON).unwrap();
        assert_eq!(res.len(), 3);
        assert_eq!(res[pair_index(0, 1, 3)], Entity::Point(Point::origin()));
        assert_eq!(res[pair_index(0, 2, 3)], Entity::Empty);
        assert_eq!(res[pair_index(1, 2, 3)], Entity::Empty);
    }

    #[test]
    fn broad_then_narrow_phase() {
        let mut ground = Collection::from_entities(vec![
            Triangle::new(
                Point::new(-1.0, -1.0, 0.0),
                Point::new(1.0, -1.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            )
            .into(),
            Triangle::new(
                Point::new(10.0, 10.0, 0.0),
                Point::new(11.0, 10.0, 0.0),
                Point::new(10.0, 11.0, 0.0),
            )
            .into(),
        ]);
        let mut probes = segments();
        probes.push(Segment::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, 1.0)));
        ground.build_spatial_index().unwrap();
        probes.build_spatial_index().unwrap();

        let mut candidates = probes.intersection_candidates(&ground);
        candidates.sort_unstable();
        assert_eq!(candidates, vec![(0, 0), (1, 0), (3, 0)]);

        let hits = probes.intersection(&ground, DEFAULT_EPSILON).unwrap();
        let vertical = hits.iter().find(|(i, _, _)| *i == 3).unwrap();
        assert_eq!(vertical.2, Entity::Point(Point::origin()));

        let query = Aabb::new(Point::new(9.0, 9.0, -1.0), Point::new(12.0, 12.0, 1.0));
        assert_eq!(ground.intersection_with_aabb(&query), vec![1]);
    }

    #[test]
    fn per_type_helpers() {
        let mut coll = segments();
        coll.push(Ball::new(1.0, Point::origin()));
        coll.push(Plane::new(Point::origin(), Vector::z()));
        coll.push(Segment::new(Point::origin(), Point::origin()));

        assert_eq!(coll.count(EntityType::Segment), 4);
        assert!(coll.contains_type(EntityType::Plane));
        assert!(!coll.are_all(EntityType::Segment));
        assert_eq!(coll.count_degenerate(DEFAULT_EPSILON), 1);
        assert!(coll.contains_degenerate(DEFAULT_EPSILON));

        coll.remove_degenerate(DEFAULT_EPSILON);
        coll.remove_type(EntityType::Ball);
        coll.remove_type(EntityType::Plane);
        assert!(coll.are_all(EntityType::Segment));
        assert_eq!(coll.len(), 3);
    }

    #[test]
    fn unsupported_pairs_are_reported() {
        let coll = Collection::from_entities(vec![
            Ball::new(1.0, Point::origin()).into(),
            Ball::new(1.0, Point::new(0.5, 0.0, 0.0)).into(),
        ]);
        assert!(coll.self_intersection(DEFAULT_EPSILON).is_err());
    }
}
