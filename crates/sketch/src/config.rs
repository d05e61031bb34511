//! Serialized scene description.
//!
//! ```json
//! {
//!   "canvas": { "width": 400, "height": 400 },
//!   "window": { "scale": [20, 20] },
//!   "axes": true,
//!   "shapes": [
//!     { "kind": "square", "x": -1, "y": 1, "side": 2, "drag": {} }
//!   ],
//!   "pointer": [{ "position": [200, 200], "pressed": true }]
//! }
//! ```

use drawing::Orientation;
use glam::Vec2;
use interaction::PointerSample;
use magic_core::UserPoint;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    pub canvas: CanvasConfig,
    pub window: WindowConfig,
    /// Draw both axes through the window origin.
    #[serde(default)]
    pub axes: bool,
    #[serde(default)]
    pub ticks: Vec<TickConfig>,
    #[serde(default)]
    pub shapes: Vec<ShapeConfig>,
    /// One sample per frame.
    #[serde(default)]
    pub pointer: Vec<PointerSample>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl CanvasConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Pixel position of the user-space origin. Defaults to the canvas center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec2>,
    /// Pixels per unit on each axis.
    pub scale: Vec2,
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: f32,
}

fn default_stroke_weight() -> f32 {
    1.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickConfig {
    pub axis: Orientation,
    pub value: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DragConfig {
    /// Event kinds whose built-in responder is switched off, e.g. `"mouseover"`.
    #[serde(default)]
    pub deactivate: Vec<String>,
    /// Stroke weight while hovered. Restored on mouseout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_stroke_weight: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationConfig {
    /// Total angle in radians
    pub angle: f32,
    /// Radians per frame
    pub step: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<UserPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ShapeConfig {
    Square {
        x: f32,
        y: f32,
        side: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_weight: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        drag: Option<DragConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rotation: Option<RotationConfig>,
    },
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_weight: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        drag: Option<DragConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rotation: Option<RotationConfig>,
    },
    Line {
        from: UserPoint,
        to: UserPoint,
        #[serde(default)]
        draggable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_weight: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        drag: Option<DragConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rotation: Option<RotationConfig>,
    },
    Point {
        x: f32,
        y: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_weight: Option<f32>,
    },
    Arrow {
        vector: Vec2,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tail: Option<UserPoint>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        head_width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        head_length: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_weight: Option<f32>,
    },
}

impl ShapeConfig {
    pub fn stroke_weight(&self) -> Option<f32> {
        match self {
            ShapeConfig::Square { stroke_weight, .. }
            | ShapeConfig::Rectangle { stroke_weight, .. }
            | ShapeConfig::Line { stroke_weight, .. }
            | ShapeConfig::Point { stroke_weight, .. }
            | ShapeConfig::Arrow { stroke_weight, .. } => *stroke_weight,
        }
    }

    pub fn drag(&self) -> Option<&DragConfig> {
        match self {
            ShapeConfig::Square { drag, .. }
            | ShapeConfig::Rectangle { drag, .. }
            | ShapeConfig::Line { drag, .. } => drag.as_ref(),
            ShapeConfig::Point { .. } | ShapeConfig::Arrow { .. } => None,
        }
    }

    pub fn rotation(&self) -> Option<&RotationConfig> {
        match self {
            ShapeConfig::Square { rotation, .. }
            | ShapeConfig::Rectangle { rotation, .. }
            | ShapeConfig::Line { rotation, .. } => rotation.as_ref(),
            ShapeConfig::Point { .. } | ShapeConfig::Arrow { .. } => None,
        }
    }
}
