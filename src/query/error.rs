use crate::shape::{dispatch_key, EntityType};
use core::fmt;

/// Error indicating that a geometric query is not supported between two entity types.
///
/// The predicates and the intersection engine are defined for every pair of entity types
/// for which the query is geometrically meaningful. Any other pair results in this error,
/// which carries the offending pair so it can be reported:
///
/// - predicates on points, balls, or the empty entity (they have no direction),
/// - collinearity tests involving anything other than lines, rays and segments,
/// - intersections between a ball and a triangle, a disk or another ball,
/// - intersections between two coplanar triangles or disks, whose result is a polygon.
///
/// # Example
///
/// ```
/// use envelope3d::math::{Point, DEFAULT_EPSILON};
/// use envelope3d::query::{self, Unsupported};
/// use envelope3d::shape::{Ball, Entity, EntityType};
///
/// let a = Entity::from(Ball::new(1.0, Point::origin()));
/// let b = Entity::from(Ball::new(1.0, Point::new(1.0, 0.0, 0.0)));
///
/// match query::intersection(&a, &b, DEFAULT_EPSILON) {
///     Err(Unsupported { first, second }) => {
///         assert_eq!((first, second), (EntityType::Ball, EntityType::Ball));
///     }
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported {
    /// The type of the first entity of the query.
    pub first: EntityType,
    /// The type of the second entity of the query.
    pub second: EntityType,
}

impl Unsupported {
    /// Creates the error for the ordered pair `(first, second)`.
    #[inline]
    pub fn new(first: EntityType, second: EntityType) -> Self {
        Unsupported { first, second }
    }

    /// The dispatch key of the offending pair.
    #[inline]
    pub fn key(&self) -> u16 {
        dispatch_key(self.first, self.second)
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query not supported between {:?} and {:?} (dispatch key {})",
            self.first,
            self.second,
            self.key()
        )
    }
}

impl core::error::Error for Unsupported {}
