//! Pointer-driven interaction for shapes: hover detection, dragging, and
//! user-registered event responders.

mod drag;
mod error;
mod event;
mod pointer;
mod responder;

pub use drag::{
    builtin_responder, DefaultResponder, DragController, DragState, FiredEvents,
    InteractionState, TakeInput,
};
pub use error::InteractionError;
pub use event::EventKind;
pub use pointer::{PointerInput, PointerSample, PressHistory};
pub use responder::{Responder, ResponderSet};
