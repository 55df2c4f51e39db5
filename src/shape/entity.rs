use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{Ball, Disk, Line, Plane, Primitive, Ray, Segment, Triangle};
use crate::utils::PointMap;
use num_derive::FromPrimitive;

/// Enum representing the type of an entity.
///
/// The discriminants are unique and are combined by [`dispatch_key`] to identify a pair
/// of entity types.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum EntityType {
    /// The absence of entity.
    Empty = 0,
    /// A point.
    Point = 2,
    /// An infinite line.
    Line = 3,
    /// A half-line.
    Ray = 4,
    /// An infinite plane.
    Plane = 5,
    /// A segment.
    Segment = 6,
    /// A triangle.
    Triangle = 7,
    /// A flat disk.
    Disk = 8,
    /// A ball.
    Ball = 9,
}

/// The key identifying the ordered pair of entity types `(a, b)`.
#[inline]
pub fn dispatch_key(a: EntityType, b: EntityType) -> u16 {
    100 * a as u16 + b as u16
}

/// A geometric primitive: one of the closed set of entity types.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Entity {
    /// The absence of entity, e.g., the result of an empty intersection.
    #[default]
    Empty,
    /// A point.
    Point(Point<Real>),
    /// An infinite line.
    Line(Line),
    /// A half-line.
    Ray(Ray),
    /// An infinite plane.
    Plane(Plane),
    /// A segment.
    Segment(Segment),
    /// A triangle.
    Triangle(Triangle),
    /// A flat disk.
    Disk(Disk),
    /// A ball.
    Ball(Ball),
}

macro_rules! forward(
    ($entity: expr, $shape: ident => $body: expr, $empty: expr) => {
        match $entity {
            Entity::Empty => $empty,
            Entity::Point($shape) => $body,
            Entity::Line($shape) => $body,
            Entity::Ray($shape) => $body,
            Entity::Plane($shape) => $body,
            Entity::Segment($shape) => $body,
            Entity::Triangle($shape) => $body,
            Entity::Disk($shape) => $body,
            Entity::Ball($shape) => $body,
        }
    }
);

macro_rules! map_entity(
    ($entity: expr, $shape: ident => $body: expr) => {
        match $entity {
            Entity::Empty => Entity::Empty,
            Entity::Point($shape) => Entity::Point($body),
            Entity::Line($shape) => Entity::Line($body),
            Entity::Ray($shape) => Entity::Ray($body),
            Entity::Plane($shape) => Entity::Plane($body),
            Entity::Segment($shape) => Entity::Segment($body),
            Entity::Triangle($shape) => Entity::Triangle($body),
            Entity::Disk($shape) => Entity::Disk($body),
            Entity::Ball($shape) => Entity::Ball($body),
        }
    }
);

impl Entity {
    /// The type tag of this entity.
    #[inline]
    pub fn entity_type(&self) -> EntityType {
        forward!(self, s => tag_of(s), EntityType::Empty)
    }

    /// Is this the empty entity?
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Entity::Empty)
    }

    /// Is this a line, a ray or a segment?
    #[inline]
    pub fn is_line_like(&self) -> bool {
        matches!(self, Entity::Line(_) | Entity::Ray(_) | Entity::Segment(_))
    }

    /// Is this a plane, a triangle or a disk?
    #[inline]
    pub fn is_plane_like(&self) -> bool {
        matches!(self, Entity::Plane(_) | Entity::Triangle(_) | Entity::Disk(_))
    }

    /// The origin and direction of a line-like entity.
    ///
    /// The direction of a segment goes from `a` to `b` and is scaled by its length.
    pub fn line_parameters(&self) -> Option<(Point<Real>, Vector<Real>)> {
        match self {
            Entity::Line(l) => Some((l.origin, l.direction)),
            Entity::Ray(r) => Some((r.origin, r.direction)),
            Entity::Segment(s) => Some((s.a, s.scaled_direction())),
            _ => None,
        }
    }

    /// The plane a plane-like entity lays on.
    pub fn laying_plane(&self) -> Option<Plane> {
        match self {
            Entity::Plane(p) => Some(*p),
            Entity::Triangle(t) => Some(t.laying_plane()),
            Entity::Disk(d) => Some(d.laying_plane()),
            _ => None,
        }
    }

    /// Returns a copy of this entity translated by `v`.
    pub fn translated(&self, v: &Vector<Real>) -> Entity {
        map_entity!(self, s => s.translated(v))
    }

    /// Returns a copy of this entity mapped by a rigid or affine transformation.
    pub fn transformed(&self, m: &impl PointMap) -> Entity {
        map_entity!(self, s => s.transformed(m))
    }

    /// Is this entity degenerate with regard to `tol`?
    ///
    /// The empty entity is always degenerate.
    pub fn is_degenerate(&self, tol: Real) -> bool {
        forward!(self, s => s.is_degenerate(tol), true)
    }

    /// Can this entity be bounded by an AABB?
    pub fn is_clampable(&self) -> bool {
        forward!(self, s => s.is_clampable(), false)
    }

    /// The tightest AABB containing this entity.
    ///
    /// Returns `None` for the entities without a finite extent, i.e., lines, rays,
    /// planes, and the empty entity.
    pub fn aabb(&self) -> Option<Aabb> {
        forward!(self, s => s.aabb(), None)
    }

    /// Are `self` and `other` the same entity within `tol`?
    pub fn relative_eq(&self, other: &Entity, tol: Real) -> bool {
        match (self, other) {
            (Entity::Empty, Entity::Empty) => true,
            (Entity::Point(a), Entity::Point(b)) => a.relative_eq(b, tol),
            (Entity::Line(a), Entity::Line(b)) => a.relative_eq(b, tol),
            (Entity::Ray(a), Entity::Ray(b)) => a.relative_eq(b, tol),
            (Entity::Plane(a), Entity::Plane(b)) => a.relative_eq(b, tol),
            (Entity::Segment(a), Entity::Segment(b)) => a.relative_eq(b, tol),
            (Entity::Triangle(a), Entity::Triangle(b)) => a.relative_eq(b, tol),
            (Entity::Disk(a), Entity::Disk(b)) => a.relative_eq(b, tol),
            (Entity::Ball(a), Entity::Ball(b)) => a.relative_eq(b, tol),
            _ => false,
        }
    }

    /// The point wrapped by this entity, if it is one.
    pub fn as_point(&self) -> Option<&Point<Real>> {
        match self {
            Entity::Point(p) => Some(p),
            _ => None,
        }
    }

    /// The segment wrapped by this entity, if it is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Entity::Segment(s) => Some(s),
            _ => None,
        }
    }

    /// The triangle wrapped by this entity, if it is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Entity::Triangle(t) => Some(t),
            _ => None,
        }
    }

    /// The disk wrapped by this entity, if it is one.
    pub fn as_disk(&self) -> Option<&Disk> {
        match self {
            Entity::Disk(d) => Some(d),
            _ => None,
        }
    }
}

#[inline]
fn tag_of<P: Primitive>(_: &P) -> EntityType {
    P::TYPE
}

macro_rules! impl_from(
    ($($variant: ident($ty: ty)),*) => {$(
        impl From<$ty> for Entity {
            #[inline]
            fn from(shape: $ty) -> Entity {
                Entity::$variant(shape)
            }
        }
    )*}
);

impl_from!(
    Point(Point<Real>),
    Line(Line),
    Ray(Ray),
    Plane(Plane),
    Segment(Segment),
    Triangle(Triangle),
    Disk(Disk),
    Ball(Ball)
);

#[cfg(test)]
mod test {
    use super::{dispatch_key, Entity, EntityType};
    use crate::math::{Isometry, Point, Vector, DEFAULT_EPSILON};
    use crate::shape::{Line, Plane, Segment};
    use num::FromPrimitive;

    #[test]
    fn type_tags_are_unique() {
        let tags = [
            EntityType::Empty,
            EntityType::Point,
            EntityType::Line,
            EntityType::Ray,
            EntityType::Plane,
            EntityType::Segment,
            EntityType::Triangle,
            EntityType::Disk,
            EntityType::Ball,
        ];

        for (i, a) in tags.iter().enumerate() {
            assert_eq!(EntityType::from_u8(*a as u8), Some(*a));
            for b in &tags[i + 1..] {
                assert_ne!(*a as u8, *b as u8);
            }
        }

        assert_eq!(dispatch_key(EntityType::Line, EntityType::Disk), 308);
        assert_eq!(EntityType::from_u8(1), None);
    }

    #[test]
    fn infinite_entities_are_not_clampable() {
        let line = Entity::from(Line::new(Point::origin(), Vector::x()));
        let plane = Entity::from(Plane::new(Point::origin(), Vector::z()));
        assert!(!line.is_clampable() && line.aabb().is_none());
        assert!(!plane.is_clampable() && plane.aabb().is_none());
        assert!(!Entity::Empty.is_clampable());
        assert!(Entity::Empty.is_degenerate(DEFAULT_EPSILON));
    }

    #[test]
    fn transform_then_compare() {
        let seg = Entity::from(Segment::new(Point::origin(), Point::new(1.0, 0.0, 0.0)));
        let iso = Isometry::new(
            Vector::new(0.0, 0.0, 1.0),
            Vector::z() * core::f64::consts::FRAC_PI_2,
        );
        let moved = seg.transformed(&iso);
        let expected = Entity::from(Segment::new(
            Point::new(0.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
        ));

        assert_eq!(moved.entity_type(), EntityType::Segment);
        assert!(moved.relative_eq(&expected, 1.0e-12));
        assert!(!moved.relative_eq(&seg, 1.0e-12));

        let lifted = Entity::from(Segment::new(
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
        ));
        assert!(seg.translated(&Vector::z()).relative_eq(&lifted, 1.0e-12));
    }
}
