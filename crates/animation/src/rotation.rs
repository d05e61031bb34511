//! Incremental rotation of a shape's vertices.
//!
//! A [`Rotation`] turns a shape by a fixed step every frame until the
//! accumulated angle reaches its target, then stops for good. The rotation is
//! applied to user-space vertices, about the user-space origin unless a
//! center is given.

use crate::error::AnimationError;
use drawing::Animated;
use magic_core::error::ensure_finite;
use magic_core::{Transform, UserPoint};
use serde::{Deserialize, Serialize};

/// Completion tolerance, as a fraction of one step. Absorbs the drift from
/// summing `step` in f32.
const COMPLETION_SLACK: f32 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    #[default]
    Active,
    Complete,
}

#[derive(Clone, Debug)]
pub struct Rotation {
    per_frame: Transform,
    angle: f32,
    step: f32,
    progress: f32,
    center: UserPoint,
    state: AnimationState,
}

impl Rotation {
    /// Rotates by `step` radians per update until `angle` radians in total.
    ///
    /// Both must be finite, `step` non-zero and turning the same way as
    /// `angle`. A zero `angle` gives a rotation that is already complete.
    pub fn new(angle: f32, step: f32) -> Result<Self, AnimationError> {
        ensure_finite("rotation angle", angle)?;
        ensure_finite("rotation step", step)?;

        let invalid = |reason| AnimationError::InvalidStep {
            angle,
            step,
            reason,
        };
        if step == 0.0 {
            return Err(invalid("step must be non-zero"));
        }
        if angle != 0.0 && angle.signum() != step.signum() {
            return Err(invalid("step turns away from the target angle"));
        }

        Ok(Self {
            per_frame: Transform::rotation(step),
            angle,
            step,
            progress: 0.0,
            center: UserPoint::ORIGIN,
            state: if angle == 0.0 {
                AnimationState::Complete
            } else {
                AnimationState::Active
            },
        })
    }

    /// Rotates about `center` instead of the user-space origin.
    pub fn with_center(mut self, center: UserPoint) -> Self {
        self.center = center;
        self
    }

    /// Advances the shape by one step, or does nothing once complete.
    pub fn give_update(&mut self, shape: &mut dyn Animated) -> Result<AnimationState, AnimationError> {
        if self.state == AnimationState::Complete {
            return Ok(self.state);
        }

        let center = self.center.0;
        let rotated: Vec<UserPoint> = shape
            .vertices()
            .iter()
            .map(|v| UserPoint(self.per_frame.apply_about(v.0, center)))
            .collect();
        shape.set_vertices(&rotated)?;

        self.progress += self.step;
        if self.progress.abs() + self.step.abs() * COMPLETION_SLACK >= self.angle.abs() {
            log::debug!("rotation of {} rad complete", self.angle);
            self.state = AnimationState::Complete;
        }
        Ok(self.state)
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == AnimationState::Complete
    }

    /// Total angle applied so far, in radians.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn center(&self) -> UserPoint {
        self.center
    }
}

/// Lets a shape pull its next frame from an animation: `shape.take_update(&mut rotation)`.
pub trait TakeUpdate {
    fn take_update(&mut self, rotation: &mut Rotation) -> Result<AnimationState, AnimationError>;
}

impl<T: Animated> TakeUpdate for T {
    fn take_update(&mut self, rotation: &mut Rotation) -> Result<AnimationState, AnimationError> {
        rotation.give_update(self)
    }
}
