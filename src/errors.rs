//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible validation issues we might encounter while building a
/// mesh from caller-supplied buffers. Geometric edge cases encountered
/// during slicing never surface here; they degrade gracefully instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The position buffer does not describe whole triangles
    #[error("position count {0} is not a multiple of 3 (three vertices per triangle)")]
    PositionCountNotTriangles(usize),
    /// A coordinate has a NaN or infinite component
    #[error("coordinate {0} has a NaN or infinite component")]
    InvalidCoordinate(Point3<Real>),
}
