//! Shapes supported by envelope3d.

pub use self::ball::Ball;
pub use self::disk::Disk;
pub use self::entity::{dispatch_key, Entity, EntityType};
pub use self::line::Line;
pub use self::plane::Plane;
pub use self::primitive::Primitive;
pub use self::ray::Ray;
pub use self::segment::Segment;
pub use self::triangle::Triangle;

mod ball;
mod disk;
mod entity;
mod line;
mod plane;
mod primitive;
mod ray;
mod segment;
mod triangle;
