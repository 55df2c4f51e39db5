//! Parallelism, orthogonality, coplanarity and collinearity tests between entities.
//!
//! Every test reduces to a vector-algebra comparison against a tolerance. Lines, rays and
//! segments are compared through their origin and direction, while planes, triangles and
//! disks are compared through the plane they lay on.

pub use self::collinear::{is_collinear, linear_collinear};
pub use self::coplanar::{is_coplanar, linear_coplanar, linear_plane_coplanar, planes_coplanar};
pub use self::orthogonal::{is_orthogonal, vectors_orthogonal};
pub use self::parallel::{is_parallel, vectors_parallel};

use crate::math::{Point, Real, Vector};
use crate::shape::{Entity, Plane};

mod collinear;
mod coplanar;
mod orthogonal;
mod parallel;

/// The geometric support used by the predicates.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Support {
    /// The origin and direction of a line, ray, or segment.
    Linear(Point<Real>, Vector<Real>),
    /// The plane of a plane, triangle, or disk.
    Planar(Plane),
}

impl Support {
    pub(crate) fn of(entity: &Entity) -> Option<Support> {
        match entity {
            Entity::Line(_) | Entity::Ray(_) | Entity::Segment(_) => entity
                .line_parameters()
                .map(|(origin, dir)| Support::Linear(origin, dir)),
            Entity::Plane(_) | Entity::Triangle(_) | Entity::Disk(_) => {
                entity.laying_plane().map(Support::Planar)
            }
            Entity::Empty | Entity::Point(_) | Entity::Ball(_) => None,
        }
    }
}
