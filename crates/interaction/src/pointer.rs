//! Pointer sampling and edge detection.
//!
//! The host only reports level-triggered state: where the pointer is and
//! whether it's pressed right now. Edge-triggered events (just pressed, just
//! released) are derived from a two-slot history of the pressed state that
//! advances exactly once per frame, after all interaction for that frame has
//! run. Detectors therefore always compare against the previous frame.

use magic_core::PixelPoint;
use serde::{Deserialize, Serialize};

/// The two most recent per-frame pressed states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressHistory {
    previous: bool,
    current: bool,
}

impl PressHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shifts the history by one sample, dropping the oldest.
    pub fn push(&mut self, pressed: bool) {
        self.previous = self.current;
        self.current = pressed;
    }

    pub fn was_pressed(&self) -> bool {
        self.previous
    }

    pub fn is_pressed(&self) -> bool {
        self.current
    }

    pub fn just_pressed(&self) -> bool {
        !self.previous && self.current
    }

    pub fn just_released(&self) -> bool {
        self.previous && !self.current
    }
}

/// One frame's worth of raw pointer state from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub position: PixelPoint,
    #[serde(default)]
    pub pressed: bool,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, pressed: bool) -> Self {
        Self {
            position: PixelPoint::new(x, y),
            pressed,
        }
    }
}

/// Pointer state for one input source, owned by whoever drives frames.
///
/// Call [`PointerInput::begin_frame`] with the host's sample before any
/// interaction runs and [`PointerInput::end_frame`] once everything for the
/// frame is done. Every drag controller that should see the same edges reads
/// the same `PointerInput`.
#[derive(Clone, Debug, Default)]
pub struct PointerInput {
    position: PixelPoint,
    raw_pressed: bool,
    history: PressHistory,
    frame: u64,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the host's pointer state for the frame about to run.
    pub fn begin_frame(&mut self, sample: PointerSample) {
        self.position = sample.position;
        self.raw_pressed = sample.pressed;
    }

    /// Post-frame hook: folds this frame's pressed state into the history.
    pub fn end_frame(&mut self) {
        self.history.push(self.raw_pressed);
        if self.history.just_pressed() {
            log::trace!("pointer pressed at frame {}", self.frame);
        } else if self.history.just_released() {
            log::trace!("pointer released at frame {}", self.frame);
        }
        self.frame += 1;
    }

    /// Pointer position for the current frame, in pixels.
    pub fn position(&self) -> PixelPoint {
        self.position
    }

    /// Raw pressed state reported by the host for the current frame.
    pub fn is_pressed(&self) -> bool {
        self.raw_pressed
    }

    pub fn just_pressed(&self) -> bool {
        self.history.just_pressed()
    }

    pub fn just_released(&self) -> bool {
        self.history.just_released()
    }

    pub fn history(&self) -> PressHistory {
        self.history
    }

    /// Number of frames completed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
