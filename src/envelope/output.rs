use crate::math::{Point, Real, Vector};

/// The contact between one rib and the ground, in world coordinates.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RibContact {
    /// The contact point.
    pub point: Point<Real>,
    /// The unit contact normal, pointing from the ground toward the rib center.
    pub normal: Vector<Real>,
    /// The friction scaling at the contact.
    pub friction: Real,
    /// The penetration depth of the rib into the ground.
    pub depth: Real,
    /// The contact area.
    pub area: Real,
    /// The volume of the rib laying under the ground.
    pub volume: Real,
}

impl Default for RibContact {
    fn default() -> Self {
        RibContact {
            point: Point::origin(),
            normal: Vector::z(),
            friction: 0.0,
            depth: 0.0,
            area: 0.0,
            volume: 0.0,
        }
    }
}
