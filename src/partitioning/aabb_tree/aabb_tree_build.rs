use super::{AabbTree, AabbTreeNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use alloc::vec::Vec;

impl AabbTree {
    /// Rebuilds this tree from scratch over the given boxes.
    ///
    /// Each box keeps its `id`, and its `pos` is set to its index in [`AabbTree::leaves`].
    /// The boxes are recursively split in two halves at the middle of the longest axis of
    /// their union, depending on which side of the cut their center lies. A split leaving
    /// one side empty moves the second half of the other side to it, so that every
    /// internal node has exactly two children.
    pub fn build(&mut self, boxes: &[Aabb]) {
        self.clear();

        if boxes.is_empty() {
            return;
        }

        self.leaves.extend(
            boxes
                .iter()
                .enumerate()
                .map(|(pos, aabb)| aabb.with_ids(aabb.id, pos)),
        );
        self.nodes.reserve(2 * boxes.len() - 1);
        self.nodes.push(AabbTreeNode::Leaf(u32::MAX));

        let mut leaf_ids: Vec<u32> = (0..boxes.len() as u32).collect();
        self.build_range(0, &mut leaf_ids);

        log::debug!(
            "Built an AABB tree over {} boxes with depth {}.",
            self.leaf_count(),
            self.depth()
        );
    }

    fn build_range(&mut self, node_id: u32, leaf_ids: &mut [u32]) {
        if let [leaf] = leaf_ids {
            self.nodes[node_id as usize] = AabbTreeNode::Leaf(*leaf);
            return;
        }

        let mut aabb = Aabb::new_invalid();
        for id in leaf_ids.iter() {
            aabb.merge(&self.leaves[*id as usize]);
        }

        let axis = aabb.longest_axis();
        let cut = aabb.center()[axis];
        let leaves = &self.leaves;
        let mut mid = partition(leaf_ids, |id| leaves[id as usize].center()[axis] > cut);

        if mid == 0 || mid == leaf_ids.len() {
            mid = leaf_ids.len() / 2;
        }

        let left = self.nodes.len() as u32;
        let right = left + 1;
        self.nodes.push(AabbTreeNode::Leaf(u32::MAX));
        self.nodes.push(AabbTreeNode::Leaf(u32::MAX));
        self.nodes[node_id as usize] = AabbTreeNode::Internal {
            aabb: aabb.with_ids(0, node_id as usize),
            children: [left, right],
        };

        let (positive, negative) = leaf_ids.split_at_mut(mid);
        self.build_range(left, positive);
        self.build_range(right, negative);
    }
}

/// Moves the elements satisfying `pred` at the beginning of `ids`, and returns how many
/// there are.
fn partition(ids: &mut [u32], mut pred: impl FnMut(u32) -> bool) -> usize {
    let mut mid = 0;

    for i in 0..ids.len() {
        if pred(ids[i]) {
            ids.swap(mid, i);
            mid += 1;
        }
    }

    mid
}
