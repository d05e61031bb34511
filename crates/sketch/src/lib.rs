//! Frame driving and JSON scenes.
//!
//! [`FrameDriver`] owns the pointer state and runs one frame at a time: it
//! feeds the host's pointer sample in, runs a [`Sketch`], then advances the
//! press history. A [`Scene`] is a sketch built from a [`SceneConfig`].

mod config;
mod driver;
mod error;
mod replay;
mod scene;

pub use config::{
    CanvasConfig, DragConfig, RotationConfig, SceneConfig, ShapeConfig, TickConfig, WindowConfig,
};
pub use driver::{Frame, FrameDriver, Sketch};
pub use error::SceneError;
pub use replay::{replay, FrameOutput};
pub use scene::{Scene, SceneEntry, SceneShape};
