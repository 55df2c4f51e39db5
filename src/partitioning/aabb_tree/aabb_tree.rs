use crate::bounding_volume::Aabb;
use alloc::vec::Vec;

/// A node of an [`AabbTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AabbTreeNode {
    /// A leaf, holding the index of its box in [`AabbTree::leaves`].
    Leaf(u32),
    /// An internal node with exactly two children.
    Internal {
        /// The union of the boxes of the subtree.
        aabb: Aabb,
        /// The indices of the two children in the node arena.
        children: [u32; 2],
    },
}

impl AabbTreeNode {
    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, AabbTreeNode::Leaf(_))
    }
}

/// A binary tree of axis-aligned bounding boxes, split at the middle of the longest axis.
///
/// The tree is stored as two arenas: the leaf boxes, in the order they were given to
/// [`AabbTree::build`], and the nodes, which refer to leaves and to other nodes by index.
/// The root is the node at index 0. Each leaf box keeps the `id` it was built with, so
/// query results can be mapped back to whatever the boxes bound.
///
/// The tree is static: it is rebuilt from scratch whenever its box set changes.
///
/// # Example
///
/// ```
/// use envelope3d::bounding_volume::Aabb;
/// use envelope3d::math::{Point, Vector};
/// use envelope3d::partitioning::AabbTree;
///
/// let boxes: Vec<_> = (0..10)
///     .map(|i| {
///         let center = Point::new(i as f64, 0.0, 0.0);
///         Aabb::from_half_extents(center, Vector::repeat(0.25)).with_ids(i, i)
///     })
///     .collect();
/// let tree = AabbTree::from_boxes(&boxes);
///
/// let query = Aabb::new(Point::new(2.5, -1.0, -1.0), Point::new(4.5, 1.0, 1.0));
/// let mut hits = vec![];
/// tree.intersect_aabb(&query, &mut |leaf| hits.push(leaf.id));
/// hits.sort();
///
/// assert_eq!(hits, vec![3, 4]);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AabbTree {
    pub(super) leaves: Vec<Aabb>,
    pub(super) nodes: Vec<AabbTreeNode>,
}

impl AabbTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree over the given boxes.
    pub fn from_boxes(boxes: &[Aabb]) -> Self {
        let mut result = Self::new();
        result.build(boxes);
        result
    }

    /// Removes every box of this tree.
    pub fn clear(&mut self) {
        self.leaves.clear();
        self.nodes.clear();
    }

    /// Does this tree contain no box at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of boxes stored in this tree.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The boxes stored in this tree.
    #[inline]
    pub fn leaves(&self) -> &[Aabb] {
        &self.leaves
    }

    /// The node arena of this tree. The root, if any, is at index 0.
    #[inline]
    pub fn nodes(&self) -> &[AabbTreeNode] {
        &self.nodes
    }

    /// The box of the node at index `id`.
    #[inline]
    pub fn node_aabb(&self, id: u32) -> &Aabb {
        match &self.nodes[id as usize] {
            AabbTreeNode::Leaf(leaf) => &self.leaves[*leaf as usize],
            AabbTreeNode::Internal { aabb, .. } => aabb,
        }
    }

    /// The box enclosing every box of this tree.
    pub fn root_aabb(&self) -> Option<Aabb> {
        (!self.is_empty()).then(|| *self.node_aabb(0))
    }

    /// The number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty tree has depth 0, and a tree with a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.node_depth(0)
        }
    }

    fn node_depth(&self, id: u32) -> usize {
        match &self.nodes[id as usize] {
            AabbTreeNode::Leaf(_) => 1,
            AabbTreeNode::Internal { children, .. } => {
                1 + self.node_depth(children[0]).max(self.node_depth(children[1]))
            }
        }
    }
}
