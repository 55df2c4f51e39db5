pub use aabb_tree::{AabbTree, AabbTreeNode};

mod aabb_tree;
mod aabb_tree_build;
mod aabb_tree_queries;
mod aabb_tree_traverse_bvtt;
