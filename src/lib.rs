/*!
envelope3d
==========

**envelope3d** computes where a tire shell touches an arbitrarily shaped
ground (a triangulated mesh or a flat plane) at every simulation step.

It is built on a small 3-dimensional geometry kernel: a closed set of
primitives, pairwise predicates and intersections between them, an
axis-aligned bounding box tree and a collection that ties them together.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod collection;
pub mod envelope;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{
        Affine3, Isometry3, Matrix3, Matrix4, Point3, Rotation3, Translation3, UnitVector3,
        Vector3,
    };

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric predicates and intersections.
    pub const DEFAULT_EPSILON: Real = 1.0e-7;

    /// A medium precision tolerance, used to detect vanishing areas and volumes.
    pub const EPSILON_MEDIUM: Real = 1.0e-10;

    /// A high precision tolerance.
    pub const EPSILON_HIGH: Real = 1.0e-16;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;

    /// The affine transformation type.
    pub use Affine3 as Affine;

    /// The rotation matrix type.
    pub use Rotation3 as Rotation;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The homogeneous 4x4 matrix type.
    pub use Matrix4 as HomogeneousMatrix;
}
