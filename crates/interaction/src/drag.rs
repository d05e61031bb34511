//! Drag controller: hit testing, event detection and responder dispatch.
//!
//! Each frame [`DragController::give_input`] evaluates every [`EventKind`]
//! in declaration order against one shape. For each kind that fires it runs
//! the built-in default responder (unless deactivated) and then the custom
//! responders registered for that kind, in insertion order.
//!
//! Detection also drives the controller's drag latch: a just-pressed edge
//! over a draggable shape sets it, a just-released edge clears it before
//! `MousePressed` is evaluated, so a shape never moves on the frame the
//! release arrives. `MouseJustPressed` itself fires over any shape, draggable
//! or not. Because `MousePressed` is the latch rather than the raw pressed
//! state, a shape keeps following the pointer after the pointer leaves its
//! bounds.
//!
//! Note that `MouseReleased` isn't gated by the hit test while
//! `MouseJustPressed` is: releasing anywhere ends a drag.

use crate::error::InteractionError;
use crate::event::EventKind;
use crate::pointer::PointerInput;
use crate::responder::{Responder, ResponderSet};
use drawing::{Cursor, Interactive, Surface};
use magic_core::PixelDelta;
use smallvec::SmallVec;
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};

/// Per-controller drag bookkeeping that default responders read and write.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Anchor position minus pointer position, captured when the drag began
    pub offset: PixelDelta,
    /// Latched from a just-pressed edge until a just-released edge
    pub dragging: bool,
}

/// Where a (shape, controller) pair stands after the latest frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

/// Built-in responder signature. Defaults get the controller's drag state
/// and the host surface on top of what custom responders see.
pub type DefaultResponder = fn(&mut DragState, &mut dyn Interactive, &PointerInput, &mut dyn Surface);

/// Events that fired during one `give_input` call, in dispatch order.
pub type FiredEvents = SmallVec<[EventKind; EventKind::COUNT]>;

fn set_move_cursor(_: &mut DragState, _: &mut dyn Interactive, _: &PointerInput, surface: &mut dyn Surface) {
    surface.cursor(Cursor::Move);
}

fn set_arrow_cursor(_: &mut DragState, _: &mut dyn Interactive, _: &PointerInput, surface: &mut dyn Surface) {
    surface.cursor(Cursor::Arrow);
}

fn capture_offset(state: &mut DragState, shape: &mut dyn Interactive, input: &PointerInput, _: &mut dyn Surface) {
    state.offset = shape.position_in_pixels() - input.position();
}

fn follow_pointer(state: &mut DragState, shape: &mut dyn Interactive, input: &PointerInput, _: &mut dyn Surface) {
    shape.set_position_in_pixels(input.position() + state.offset);
}

fn release(_: &mut DragState, _: &mut dyn Interactive, _: &PointerInput, _: &mut dyn Surface) {}

/// The built-in responder for each event kind. Reactivation restores from here.
pub fn builtin_responder(kind: EventKind) -> DefaultResponder {
    match kind {
        EventKind::MouseOver => set_move_cursor,
        EventKind::MouseOut => set_arrow_cursor,
        EventKind::MouseJustPressed => capture_offset,
        EventKind::MousePressed => follow_pointer,
        EventKind::MouseReleased => release,
    }
}

/// Makes a shape draggable with the pointer.
///
/// One controller keeps one drag latch, so a controller shared by several
/// shapes drags them as a group. Give each shape its own controller to drag
/// them independently.
pub struct DragController {
    defaults: [Option<DefaultResponder>; EventKind::COUNT],
    custom: [ResponderSet; EventKind::COUNT],
    state: DragState,
    hovering: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            defaults: std::array::from_fn(|i| {
                EventKind::iter().nth(i).map(builtin_responder)
            }),
            custom: Default::default(),
            state: DragState::default(),
            hovering: false,
        }
    }

    /// Runs one frame of interaction for `shape`.
    ///
    /// Call once per frame per shape, between the pointer's `begin_frame` and
    /// `end_frame`.
    pub fn give_input(
        &mut self,
        shape: &mut dyn Interactive,
        input: &PointerInput,
        surface: &mut dyn Surface,
    ) -> FiredEvents {
        self.hovering = shape.hit_bounds().contains_point(input.position());

        let mut fired = FiredEvents::new();
        for kind in EventKind::iter() {
            if !self.detect(kind, shape, input) {
                continue;
            }
            log::trace!("{kind} at {:?}", input.position());
            fired.push(kind);

            if let Some(respond) = self.defaults[kind.index()] {
                respond(&mut self.state, shape, input, surface);
            }
            for responder in self.custom[kind.index()].iter() {
                responder.call(shape, input);
            }
        }
        fired
    }

    fn detect(&mut self, kind: EventKind, shape: &dyn Interactive, input: &PointerInput) -> bool {
        match kind {
            EventKind::MouseOver => self.hovering,
            EventKind::MouseOut => !self.hovering,
            EventKind::MouseJustPressed => {
                let pressed = input.just_pressed() && self.hovering;
                if pressed && shape.is_draggable() {
                    log::debug!("drag started at {:?}", input.position());
                    self.state.dragging = true;
                }
                pressed
            }
            EventKind::MousePressed => {
                // the release edge ends the drag before the shape can move again
                if self.state.dragging && input.just_released() {
                    log::debug!("drag ended at {:?}", input.position());
                    self.state.dragging = false;
                }
                self.state.dragging
            }
            EventKind::MouseReleased => input.just_released(),
        }
    }

    /// Adds a custom responder for `kind`, after any already registered.
    /// Adding the same responder twice has no further effect.
    pub fn add_event_responder(&mut self, kind: EventKind, responder: &Responder) -> bool {
        self.custom[kind.index()].insert(responder)
    }

    /// Removes a custom responder. Removing one that isn't registered is a no-op.
    pub fn remove_event_responder(&mut self, kind: EventKind, responder: &Responder) -> bool {
        self.custom[kind.index()].remove(responder)
    }

    /// Stops the built-in responder for `kind` from running. Custom
    /// responders for `kind` are unaffected.
    pub fn deactivate_default_responder(&mut self, kind: EventKind) {
        self.defaults[kind.index()] = None;
    }

    /// Restores the built-in responder for `kind`.
    pub fn reactivate_default_responder(&mut self, kind: EventKind) {
        self.defaults[kind.index()] = Some(builtin_responder(kind));
    }

    pub fn is_default_active(&self, kind: EventKind) -> bool {
        self.defaults[kind.index()].is_some()
    }

    pub fn responders(&self, kind: EventKind) -> &ResponderSet {
        &self.custom[kind.index()]
    }

    /// [`Self::add_event_responder`] with the event named by a string.
    pub fn add_event_responder_by_name(
        &mut self,
        name: &str,
        responder: &Responder,
    ) -> Result<bool, InteractionError> {
        let kind = EventKind::parse(name)?;
        Ok(self.add_event_responder(kind, responder))
    }

    pub fn remove_event_responder_by_name(
        &mut self,
        name: &str,
        responder: &Responder,
    ) -> Result<bool, InteractionError> {
        let kind = EventKind::parse(name)?;
        Ok(self.remove_event_responder(kind, responder))
    }

    pub fn deactivate_default_responder_by_name(&mut self, name: &str) -> Result<(), InteractionError> {
        let kind = EventKind::parse(name)?;
        self.deactivate_default_responder(kind);
        Ok(())
    }

    pub fn reactivate_default_responder_by_name(&mut self, name: &str) -> Result<(), InteractionError> {
        let kind = EventKind::parse(name)?;
        self.reactivate_default_responder(kind);
        Ok(())
    }

    pub fn state(&self) -> InteractionState {
        if self.state.dragging {
            InteractionState::Dragging
        } else if self.hovering {
            InteractionState::Hovering
        } else {
            InteractionState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn drag_offset(&self) -> PixelDelta {
        self.state.offset
    }
}

impl fmt::Debug for DragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deactivated: Vec<EventKind> = EventKind::iter()
            .filter(|kind| !self.is_default_active(*kind))
            .collect();
        f.debug_struct("DragController")
            .field("state", &self.state)
            .field("hovering", &self.hovering)
            .field("deactivated", &deactivated)
            .field("custom", &self.custom)
            .finish()
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

/// Lets a shape pull its input from a controller: `shape.take_input(...)`.
pub trait TakeInput {
    fn take_input(
        &mut self,
        controller: &mut DragController,
        input: &PointerInput,
        surface: &mut dyn Surface,
    ) -> FiredEvents;
}

impl<T: Interactive> TakeInput for T {
    fn take_input(
        &mut self,
        controller: &mut DragController,
        input: &PointerInput,
        surface: &mut dyn Surface,
    ) -> FiredEvents {
        controller.give_input(self, input, surface)
    }
}
