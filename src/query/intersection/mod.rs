//! Intersection between any two entities.
//!
//! The general entry point is [`intersection`]. The functions named
//! `intersection_[shape1]_[shape2]` are the specialized versions it dispatches to, where
//! `linear` stands for any line, ray or segment viewed through [`Linear`]. The
//! `intersection_coplanar_*` and `intersection_collinear_*` variants assume their inputs
//! were already found to lay on a common plane or line.

pub use self::intersection::intersection;
pub use self::intersection_collinear::{
    intersection_collinear, intersection_collinear_ray_ray, intersection_collinear_ray_segment,
    intersection_collinear_segment_segment,
};
pub use self::intersection_coplanar::{
    intersection_coplanar_linear_disk, intersection_coplanar_linear_linear,
    intersection_coplanar_linear_triangle,
};
pub use self::intersection_linear::{
    intersection_linear_ball, intersection_linear_disk, intersection_linear_plane,
    intersection_linear_triangle, ray_triangle,
};
pub use self::intersection_planar::{
    intersection_disk_disk, intersection_plane_ball, intersection_plane_disk,
    intersection_plane_plane, intersection_plane_plane_plane, intersection_plane_triangle,
    intersection_triangle_disk, intersection_triangle_triangle,
};
pub use self::intersection_point::intersection_point_entity;
pub use self::linear::{Linear, LinearKind};

mod intersection;
mod intersection_collinear;
mod intersection_coplanar;
mod intersection_linear;
mod intersection_planar;
mod intersection_point;
mod linear;
