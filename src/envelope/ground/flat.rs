use crate::envelope::EnvelopeError;
use crate::math::{Point, Real, Vector};
use crate::shape::Plane;

/// An infinite flat ground with a uniform friction.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlatGround {
    /// The ground plane. Its normal points out of the ground.
    pub plane: Plane,
    /// The friction scaling of the ground.
    pub friction: Real,
}

impl FlatGround {
    /// Creates a flat ground through `origin`, with the given normal and friction.
    ///
    /// The normal is normalized. Fails if the friction is negative.
    pub fn new(
        origin: Point<Real>,
        normal: Vector<Real>,
        friction: Real,
    ) -> Result<Self, EnvelopeError> {
        if friction < 0.0 {
            return Err(EnvelopeError::NegativeFriction { line: 0 });
        }

        Ok(FlatGround {
            plane: Plane::new(origin, normal),
            friction,
        })
    }

    /// The unit normal of the ground.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        self.plane.normal
    }
}

#[cfg(test)]
mod test {
    use super::FlatGround;
    use crate::math::{Point, Vector};

    #[test]
    fn normal_is_normalized() {
        let ground = FlatGround::new(Point::origin(), Vector::new(0.0, 0.0, 3.0), 1.0).unwrap();
        assert_relative_eq!(ground.normal(), Vector::z());
        assert!(FlatGround::new(Point::origin(), Vector::z(), -0.5).is_err());
    }
}
