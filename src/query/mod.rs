//! Non-persistent geometric queries between entities.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection()`] to compute the entity shared by two entities.
//! * [`query::is_parallel()`], [`query::is_orthogonal()`], [`query::is_coplanar()`] and
//!   [`query::is_collinear()`] to test the relative orientation of two entities.
//!
//! # Specific cases
//! The functions exported by the `intersection` and `predicates` submodules are more
//! specific versions of the ones described above. For example `intersection_plane_ball`
//! computes the intersection between two entities known at compile-time to be a plane and
//! a ball. They have the form `intersection_[shape1]_[shape2]()` where `[shape1]` and
//! `[shape2]` are the types of the entities passed to the function. `linear` stands for
//! any line, ray or segment.
//!
//! [`query::intersection()`]: crate::query::intersection()
//! [`query::is_parallel()`]: crate::query::is_parallel()
//! [`query::is_orthogonal()`]: crate::query::is_orthogonal()
//! [`query::is_coplanar()`]: crate::query::is_coplanar()
//! [`query::is_collinear()`]: crate::query::is_collinear()

pub use self::error::Unsupported;
pub use self::intersection::{intersection, ray_triangle};
pub use self::predicates::{is_collinear, is_coplanar, is_orthogonal, is_parallel};

mod error;
pub mod intersection;
pub mod predicates;
