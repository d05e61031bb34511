//! Per-frame shape animations.

mod error;
mod rotation;

pub use error::AnimationError;
pub use rotation::{AnimationState, Rotation, TakeUpdate};
