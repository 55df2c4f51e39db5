//! Grounds a shell can be in contact with.

pub use self::flat::FlatGround;
pub use self::mesh::{MeshGround, TriangleGround};

mod flat;
mod loader;
mod mesh;

/// A reference to the ground a shell is set up against.
#[derive(Copy, Clone, Debug)]
pub enum Ground<'a> {
    /// A triangulated ground, queried through its AABB tree.
    Mesh(&'a MeshGround),
    /// A flat ground.
    Flat(&'a FlatGround),
}

impl<'a> From<&'a MeshGround> for Ground<'a> {
    fn from(mesh: &'a MeshGround) -> Self {
        Ground::Mesh(mesh)
    }
}

impl<'a> From<&'a FlatGround> for Ground<'a> {
    fn from(flat: &'a FlatGround) -> Self {
        Ground::Flat(flat)
    }
}
