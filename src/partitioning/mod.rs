//! Spatial partitioning tools.

pub use self::aabb_tree::{AabbTree, AabbTreeNode};

mod aabb_tree;
