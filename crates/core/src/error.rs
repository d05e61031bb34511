use thiserror::Error;

/// Precondition violations caught when building or mutating geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("axis scale must be finite and non-zero, got ({x}, {y})")]
    InvalidScale { x: f32, y: f32 },
    #[error("expected {expected} vertices, got {actual}")]
    VertexCount { expected: usize, actual: usize },
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f32 },
    #[error("{0} needs a non-zero vector")]
    ZeroVector(&'static str),
}

/// Fails with [`GeometryError::NonFinite`] unless `value` is finite.
pub fn ensure_finite(what: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { what, value })
    }
}
