use super::{AabbTree, AabbTreeNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use alloc::vec::Vec;

impl AabbTree {
    /*
     * Traversal of the Bounding Volume Test Tree of two trees.
     */
    /// Traverses the Bounding Volume Test Tree of `self` against `other`.
    ///
    /// The closure `f` is called on each pair of leaf boxes that overlap, with the box of
    /// `self` first. Pairs of nodes whose boxes do not overlap are pruned with their whole
    /// subtrees.
    pub fn intersect_tree(&self, other: &AabbTree, f: &mut impl FnMut(&Aabb, &Aabb)) {
        if self.is_empty() || other.is_empty() {
            return;
        }

        self.intersect_nodes(0, other, 0, f);
    }

    /// The `id`s of every pair of overlapping leaf boxes between `self` and `other`.
    pub fn intersection_pairs(&self, other: &AabbTree) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        self.intersect_tree(other, &mut |a, b| pairs.push((a.id, b.id)));
        pairs
    }

    fn intersect_nodes(
        &self,
        a: u32,
        other: &AabbTree,
        b: u32,
        f: &mut impl FnMut(&Aabb, &Aabb),
    ) {
        if !self.node_aabb(a).intersects(other.node_aabb(b)) {
            return;
        }

        match (&self.nodes[a as usize], &other.nodes[b as usize]) {
            (AabbTreeNode::Leaf(leaf_a), AabbTreeNode::Leaf(leaf_b)) => f(
                &self.leaves[*leaf_a as usize],
                &other.leaves[*leaf_b as usize],
            ),
            (AabbTreeNode::Leaf(_), AabbTreeNode::Internal { children, .. }) => {
                self.intersect_nodes(a, other, children[0], f);
                self.intersect_nodes(a, other, children[1], f);
            }
            (AabbTreeNode::Internal { children, .. }, AabbTreeNode::Leaf(_)) => {
                self.intersect_nodes(children[0], other, b, f);
                self.intersect_nodes(children[1], other, b, f);
            }
            (
                AabbTreeNode::Internal {
                    children: children_a,
                    ..
                },
                AabbTreeNode::Internal {
                    children: children_b,
                    ..
                },
            ) => {
                for child_a in children_a {
                    for child_b in children_b {
                        self.intersect_nodes(*child_a, other, *child_b, f);
                    }
                }
            }
        }
    }
}
