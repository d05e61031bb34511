use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("event type `{0}` is not supported; expected one of mouseover, mouseout, mousejustpressed, mousepressed, mousereleased")]
    UnsupportedEventKind(String),
}
