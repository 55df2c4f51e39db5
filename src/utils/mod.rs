//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::point_map::PointMap;
pub(crate) use self::sort::sort2;

mod center;
mod point_map;
mod sort;
