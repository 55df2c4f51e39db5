use super::EnvelopeError;
use crate::math::{Real, DEFAULT_EPSILON};

/// The cross-section of a shell: its radius as a function of the lateral coordinate `y`.
///
/// A profile is defined on `[-half_width, half_width]`, and fails outside of it.
pub trait Profile {
    /// The largest radius of the profile.
    fn max_radius(&self) -> Real;

    /// Half of the lateral extent of the profile.
    fn half_width(&self) -> Real;

    /// The radius at the lateral coordinate `y`.
    fn radius(&self, y: Real) -> Result<Real, EnvelopeError>;

    /// The derivative of the radius at the lateral coordinate `y`.
    fn slope(&self, y: Real) -> Result<Real, EnvelopeError>;

    /// The angle of the profile tangent at the lateral coordinate `y`.
    fn angle(&self, y: Real) -> Result<Real, EnvelopeError> {
        self.slope(y).map(Real::atan)
    }

    /// Fails if `y` is outside of the bounds of this profile.
    fn check_bounds(&self, y: Real) -> Result<(), EnvelopeError> {
        let bound = self.half_width();

        if y.abs() <= bound {
            Ok(())
        } else {
            Err(EnvelopeError::OutOfProfileBounds { y, bound })
        }
    }
}

/// A hyperellipse profile.
///
/// The radius at `y` is `rx * (1 - (|y| / ry)^my)^(1 / mx)`: `rx` and `ry` are the
/// semi-axes of the hyperellipse, `mx` and `my` its degrees, and `ly` is the half-width of
/// the region where it is evaluated (at most `ry`).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hyperellipse {
    /// The semi-axis along the radial direction.
    pub rx: Real,
    /// The degree along the radial direction.
    pub mx: Real,
    /// The semi-axis along the lateral direction.
    pub ry: Real,
    /// The degree along the lateral direction.
    pub my: Real,
    /// The half-width of the profile.
    pub ly: Real,
}

impl Hyperellipse {
    /// Creates a new hyperellipse profile.
    pub fn new(rx: Real, mx: Real, ry: Real, my: Real, ly: Real) -> Self {
        Hyperellipse { rx, mx, ry, my, ly }
    }

    fn ratio(&self, y: Real) -> Real {
        (y.abs() / self.ry).powf(self.my)
    }
}

impl Profile for Hyperellipse {
    fn max_radius(&self) -> Real {
        self.rx
    }

    fn half_width(&self) -> Real {
        self.ly
    }

    fn radius(&self, y: Real) -> Result<Real, EnvelopeError> {
        self.check_bounds(y)?;
        Ok(self.rx * (1.0 - self.ratio(y)).powf(1.0 / self.mx))
    }

    fn slope(&self, y: Real) -> Result<Real, EnvelopeError> {
        self.check_bounds(y)?;

        if y.abs() < DEFAULT_EPSILON {
            return Ok(0.0);
        }

        let ratio = self.ratio(y);
        Ok(-y.signum() * (1.0 - ratio).powf((1.0 - self.mx) / self.mx) * ratio * self.rx
            * self.my
            / (self.mx * y.abs()))
    }
}

#[cfg(test)]
mod test {
    use super::{Hyperellipse, Profile};
    use crate::envelope::EnvelopeError;

    fn profile() -> Hyperellipse {
        Hyperellipse::new(0.327, 4.3, 0.11, 2.0, 0.1)
    }

    #[test]
    fn radius_at_center_is_rx() {
        let p = profile();
        assert_relative_eq!(p.radius(0.0).unwrap(), 0.327);
        assert_eq!(p.slope(0.0).unwrap(), 0.0);
        assert_eq!(p.angle(0.0).unwrap(), 0.0);
    }

    #[test]
    fn profile_is_symmetric_and_decreasing() {
        let p = profile();
        let (r1, r2) = (p.radius(0.05).unwrap(), p.radius(0.09).unwrap());
        assert_relative_eq!(r1, p.radius(-0.05).unwrap());
        assert!(r2 < r1 && r1 < p.max_radius());

        let s = p.slope(0.05).unwrap();
        assert!(s < 0.0);
        assert_relative_eq!(s, -p.slope(-0.05).unwrap());
    }

    #[test]
    fn slope_matches_finite_differences() {
        let p = profile();
        let (y, h) = (0.06, 1.0e-6);
        let fd = (p.radius(y + h).unwrap() - p.radius(y - h).unwrap()) / (2.0 * h);
        assert_relative_eq!(p.slope(y).unwrap(), fd, epsilon = 1.0e-6);
    }

    #[test]
    fn out_of_bounds_errs() {
        let p = profile();
        assert!(matches!(
            p.radius(0.2),
            Err(EnvelopeError::OutOfProfileBounds { .. })
        ));
        assert!(p.slope(-0.100001).is_err());
        assert!(p.radius(0.1).is_ok());
    }
}
