use magic_core::GeometryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("invalid rotation step {step} for target angle {angle}: {reason}")]
    InvalidStep {
        angle: f32,
        step: f32,
        reason: &'static str,
    },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
