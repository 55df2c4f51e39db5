use super::{AabbTree, AabbTreeNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use alloc::vec::Vec;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

impl AabbTree {
    /// Calls `f` on every leaf box intersecting the given `aabb`.
    pub fn intersect_aabb(&self, aabb: &Aabb, f: &mut impl FnMut(&Aabb)) {
        if self.is_empty() {
            return;
        }

        let mut stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        stack.push(0);

        while let Some(id) = stack.pop() {
            if !self.node_aabb(id).intersects(aabb) {
                continue;
            }

            match &self.nodes[id as usize] {
                AabbTreeNode::Leaf(leaf) => f(&self.leaves[*leaf as usize]),
                AabbTreeNode::Internal { children, .. } => stack.extend_from_slice(children),
            }
        }
    }

    /// The smallest of `dist` and the farthest-corner distances between `point` and the leaf
    /// boxes of this tree.
    ///
    /// Subtrees whose box is farther than the best distance found so far are skipped. The
    /// result is an upper bound of the distance between `point` and the closest object
    /// bounded by the tree.
    pub fn min_exterior_distance(&self, point: &Point<Real>, dist: Real) -> Real {
        if self.is_empty() {
            dist
        } else {
            self.node_min_exterior_distance(0, point, dist)
        }
    }

    fn node_min_exterior_distance(&self, id: u32, point: &Point<Real>, dist: Real) -> Real {
        match &self.nodes[id as usize] {
            AabbTreeNode::Leaf(leaf) => {
                dist.min(self.leaves[*leaf as usize].exterior_distance(point))
            }
            AabbTreeNode::Internal { aabb, children } => {
                if aabb.center_distance(point) > dist {
                    return dist;
                }

                let dist = self.node_min_exterior_distance(children[0], point, dist);
                self.node_min_exterior_distance(children[1], point, dist)
            }
        }
    }

    /// Pushes to `out` every leaf box that may contain a point closer to `point` than `dist`.
    pub fn select_less_than_distance<'a>(
        &'a self,
        point: &Point<Real>,
        dist: Real,
        out: &mut Vec<&'a Aabb>,
    ) {
        if self.is_empty() {
            return;
        }

        let mut stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        stack.push(0);

        while let Some(id) = stack.pop() {
            if self.node_aabb(id).center_distance(point) > dist {
                continue;
            }

            match &self.nodes[id as usize] {
                AabbTreeNode::Leaf(leaf) => out.push(&self.leaves[*leaf as usize]),
                AabbTreeNode::Internal { children, .. } => stack.extend_from_slice(children),
            }
        }
    }

    /// The leaf boxes that may contain the object bounded by this tree closest to `point`.
    ///
    /// This is a branch-and-bound search: the farthest-corner distance of the leaves
    /// bounds the distance to the closest object from above, and every leaf whose
    /// distance lower bound does not exceed it is a candidate.
    pub fn nearest_candidates(&self, point: &Point<Real>) -> Vec<&Aabb> {
        let mut out = Vec::new();

        if !self.is_empty() {
            let dist = self.min_exterior_distance(point, Real::MAX);
            self.select_less_than_distance(point, dist, &mut out);
        }

        out
    }
}
