use crate::math::Real;
use alloc::string::String;

/// Errors raised while building a shell, loading a ground, or posing a shell.
#[derive(thiserror::Error, Debug)]
pub enum EnvelopeError {
    /// The pose matrix is not a rigid, right-handed transformation.
    #[error("not an orthonormal and right-handed transformation (determinant: {determinant})")]
    NonRigidTransform {
        /// The determinant of the linear part of the rejected matrix.
        determinant: Real,
    },
    /// A shell needs at least one rib.
    #[error("invalid number of ribs: {0}")]
    InvalidRibCount(usize),
    /// More ribs than a shell can hold were requested.
    #[error("{requested} ribs requested, but a shell holds at most {capacity}")]
    TooManyRibs {
        /// The requested number of ribs.
        requested: usize,
        /// The maximum number of ribs of a shell.
        capacity: usize,
    },
    /// A profile was evaluated outside of its lateral bounds.
    #[error("lateral coordinate {y} is outside of the profile bounds [-{bound}, {bound}]")]
    OutOfProfileBounds {
        /// The lateral coordinate.
        y: Real,
        /// The half-width of the profile.
        bound: Real,
    },
    /// The profile yields a radius that is not finite and positive.
    #[error("rib {rib} has an invalid radius: {radius}")]
    InvalidRadius {
        /// The index of the rib.
        rib: usize,
        /// The offending radius.
        radius: Real,
    },
    /// A ground entity cannot be bounded by an AABB.
    #[error("ground entity {0} cannot be bounded by an AABB")]
    UnboundableEntity(usize),
    /// The ground file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The ground file suffix is neither `.rdf` nor `.obj`.
    #[error("unrecognized ground file extension: {0:?}")]
    UnrecognizedExtension(String),
    /// The ground file contains a row that cannot be parsed.
    #[error("malformed mesh at line {line}: {reason}")]
    MalformedMesh {
        /// The 1-based line number of the offending row.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A ground mesh must contain at least one triangle.
    #[error("the ground mesh does not contain any triangle")]
    EmptyMesh,
    /// Frictions must be non-negative.
    #[error("negative friction at line {line}")]
    NegativeFriction {
        /// The 1-based line number of the offending row, or 0 when the friction was not
        /// read from a file.
        line: usize,
    },
}
