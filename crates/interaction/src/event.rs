//! The closed set of pointer events a drag controller detects.

use crate::error::InteractionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Pointer event kinds, declared in dispatch order.
///
/// Every frame a controller evaluates all of them in this order, so the
/// declaration order is part of the behavior.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    /// Pointer is inside the shape's hit box.
    MouseOver,
    /// Pointer is outside the shape's hit box.
    MouseOut,
    /// Pointer went down this frame while over the shape.
    MouseJustPressed,
    /// A drag started on this controller and hasn't been released yet.
    MousePressed,
    /// Pointer went up this frame, wherever it is.
    MouseReleased,
}

impl EventKind {
    /// Parses an event name such as `"mouseover"`.
    ///
    /// Unknown names are reported with `log::error!` as well as returned.
    pub fn parse(name: &str) -> Result<Self, InteractionError> {
        Self::from_str(name).map_err(|_| {
            log::error!("Event type {name} not currently supported. Please check docs and check for typos.");
            InteractionError::UnsupportedEventKind(name.to_string())
        })
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
