//! The seam to the rendering host.
//!
//! Mathemagical never draws by itself. Everything it renders goes through
//! the handful of primitives on [`Surface`], all in pixel coordinates.

use glam::Vec2;
use magic_core::PixelPoint;
use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// Pointer glyphs the interaction layer asks the host for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cursor {
    #[default]
    Arrow,
    Move,
}

/// Primitive drawing operations provided by the rendering host.
pub trait Surface {
    /// Size of the drawable area in pixels.
    fn size(&self) -> Vec2;

    /// Sets the stroke weight used by subsequent primitives.
    fn stroke_weight(&mut self, weight: f32);

    fn point(&mut self, at: PixelPoint);

    fn line(&mut self, from: PixelPoint, to: PixelPoint);

    /// Draws a closed polygon through `vertices`.
    fn polygon(&mut self, vertices: &[PixelPoint]);

    fn cursor(&mut self, cursor: Cursor);
}

/// A single recorded primitive call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    StrokeWeight { weight: f32 },
    Point { at: PixelPoint },
    Line { from: PixelPoint, to: PixelPoint },
    Polygon { vertices: Vec<PixelPoint> },
    Cursor { cursor: Cursor },
}

/// A surface that records every call instead of drawing.
///
/// Used by tests and by the headless replay tool.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Vec2,
    calls: Vec<DrawCall>,
    cursor: Cursor,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            calls: Vec::new(),
            cursor: Cursor::default(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Takes the recorded calls, leaving the surface empty.
    /// The current cursor is kept since it's host state, not a frame's output.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn current_cursor(&self) -> Cursor {
        self.cursor
    }

    /// The most recent polygon drawn, if any.
    pub fn last_polygon(&self) -> Option<&[PixelPoint]> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Polygon { vertices } => Some(vertices.as_slice()),
            _ => None,
        })
    }

    /// Every line segment drawn, in order.
    pub fn lines(&self) -> Vec<(PixelPoint, PixelPoint)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.calls.push(DrawCall::StrokeWeight { weight });
    }

    fn point(&mut self, at: PixelPoint) {
        self.calls.push(DrawCall::Point { at });
    }

    fn line(&mut self, from: PixelPoint, to: PixelPoint) {
        self.calls.push(DrawCall::Line { from, to });
    }

    fn polygon(&mut self, vertices: &[PixelPoint]) {
        self.calls.push(DrawCall::Polygon {
            vertices: vertices.to_vec(),
        });
    }

    fn cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.calls.push(DrawCall::Cursor { cursor });
    }
}
