use crate::math::Real;

/// Tolerances and sampling parameters of the contact algorithm.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnvelopeSettings {
    /// Tolerance of the intersection between a rib and a ground triangle.
    pub intersection_tolerance: Real,
    /// Tolerance on the orthonormality and determinant of a shell pose.
    pub transform_tolerance: Real,
    /// Chords shorter than this are not considered a contact.
    pub min_chord_length: Real,
    /// Below this total contact volume, shell aggregates are unweighted means.
    pub min_volume: Real,
    /// Offset of the longitudinal sampling probes, as a fraction of the rib radius.
    pub sampling_dx: Real,
    /// Offset of the lateral sampling probes, as a fraction of the rib width.
    pub sampling_dy: Real,
}

impl Default for EnvelopeSettings {
    fn default() -> Self {
        EnvelopeSettings {
            intersection_tolerance: 1.0e-5,
            transform_tolerance: 1.0e-7,
            min_chord_length: 1.0e-7,
            min_volume: 1.0e-10,
            sampling_dx: 0.1,
            sampling_dy: 0.3,
        }
    }
}
