//! Contact between a tire shell and the ground.
//!
//! A [`Shell`] is a set of disk-shaped [`Rib`]s sampled from a cross-section [`Profile`].
//! Each simulation step, [`Shell::setup`] poses the shell and computes where every rib
//! touches the [`Ground`]:
//!
//! - On a [`MeshGround`], the triangles under the shell box are shortlisted through the
//!   AABB tree of the mesh (broad phase), dispatched to the ribs they may touch, and
//!   intersected with each rib (narrow phase). A shell outside of the mesh gets the default
//!   contact of every rib, and is reported as not in the mesh.
//! - On a [`FlatGround`], each rib is tested against the ground plane directly.
//!
//! The rib contacts are then aggregated into a single contact of the shell, weighted by the
//! volume of each rib laying under the ground.
//!
//! # Example
//!
//! ```
//! use envelope3d::envelope::{
//!     EnvelopeMethod, EnvelopeSettings, FlatGround, Hyperellipse, Shell,
//! };
//! use envelope3d::math::{Isometry, Point, Vector};
//!
//! let profile = Hyperellipse::new(0.3, 4.0, 0.11, 2.0, 0.1);
//! let mut shell = Shell::new(profile, 10, EnvelopeSettings::default()).unwrap();
//! let ground = FlatGround::new(Point::origin(), Vector::z(), 1.0).unwrap();
//!
//! let pose = Isometry::translation(0.0, 0.0, 0.29).to_homogeneous();
//! assert!(shell.setup(&ground, EnvelopeMethod::Geometric, &pose).unwrap());
//! assert!(shell.contact_depth() > 0.0);
//! assert!((shell.contact_normal() - Vector::z()).norm() < 1.0e-12);
//! ```

pub use self::error::EnvelopeError;
pub use self::ground::{FlatGround, Ground, MeshGround, TriangleGround};
pub use self::output::RibContact;
pub use self::profile::{Hyperellipse, Profile};
pub use self::rib::Rib;
pub use self::settings::EnvelopeSettings;
pub use self::shell::{EnvelopeMethod, Shell, MAX_RIBS};

mod error;
mod ground;
mod output;
mod profile;
mod rib;
mod settings;
mod shell;
