//! Headless playback of a scene's pointer trace.

use crate::driver::FrameDriver;
use crate::scene::Scene;
use drawing::{Cursor, DrawCall, RecordingSurface};
use interaction::PointerSample;
use serde::Serialize;

/// Everything one frame drew, plus the cursor the host was left showing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameOutput {
    pub frame: u64,
    pub cursor: Cursor,
    pub calls: Vec<DrawCall>,
}

/// Plays the scene's pointer trace onto a recording surface.
///
/// Runs one frame per sample, or exactly `frames` frames if given. Past the
/// end of the trace the last sample is held; an empty trace holds the
/// pointer released at the canvas origin.
pub fn replay(scene: &mut Scene, frames: Option<usize>) -> Vec<FrameOutput> {
    let trace = scene.pointer_trace().to_vec();
    let frames = frames.unwrap_or(trace.len());
    let held = trace.last().copied().unwrap_or_default();

    let mut driver = FrameDriver::new();
    let mut surface = RecordingSurface::new(scene.canvas_size());
    let mut outputs = Vec::with_capacity(frames);

    for i in 0..frames {
        let sample: PointerSample = trace.get(i).copied().unwrap_or(held);
        driver.run_frame(sample, scene, &mut surface);
        outputs.push(FrameOutput {
            frame: i as u64,
            cursor: surface.current_cursor(),
            calls: surface.take_calls(),
        });
    }
    log::debug!("replayed {frames} frames ({} samples in trace)", trace.len());
    outputs
}
