use animation::AnimationError;
use interaction::InteractionError;
use magic_core::GeometryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    #[error(transparent)]
    Animation(#[from] AnimationError),
    #[error("no shape at index {index}; the scene has {len}")]
    ShapeIndex { index: usize, len: usize },
    #[error("shape {index} is a {kind}, which can't be dragged")]
    NotInteractive { index: usize, kind: &'static str },
    #[error("shape {index} is a {kind}, which can't be animated")]
    NotAnimated { index: usize, kind: &'static str },
}
