//! Error types for the geometry model.

use crate::shapes::ShapeId;
use thiserror::Error;

/// Precondition violations raised by shape construction and editing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{shape} requires {expected} vertices, got {actual}")]
    InvalidVertexCount {
        shape: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invariant violated on {shape}: {reason}")]
    InvariantViolation {
        shape: &'static str,
        reason: String,
    },
    #[error("cannot rescale {dimension} from a previous value of zero")]
    DegenerateScale { dimension: &'static str },
    #[error("vertex index {index} out of range for a shape with {count} vertices")]
    VertexIndexOutOfRange { index: usize, count: usize },
    #[error("shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

impl GeometryError {
    /// Build an [`GeometryError::InvariantViolation`].
    ///
    /// These are unreachable for correctly constructed shapes, so debug
    /// builds abort at the detection point.
    pub(crate) fn invariant(shape: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if cfg!(debug_assertions) {
            panic!("invariant violated on {shape}: {reason}");
        }
        log::error!("invariant violated on {}: {}", shape, reason);
        GeometryError::InvariantViolation { shape, reason }
    }
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Compute the ratio used by the dimension setters, rejecting a zero
/// previous value.
pub(crate) fn rescale_factor(
    dimension: &'static str,
    old: f64,
    new: f64,
) -> GeometryResult<f64> {
    if old == 0.0 {
        log::warn!("rejected rescale of {} from zero to {}", dimension, new);
        return Err(GeometryError::DegenerateScale { dimension });
    }
    Ok(new / old)
}
