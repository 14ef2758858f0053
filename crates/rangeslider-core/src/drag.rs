#![forbid(unsafe_code)]

//! Pointer drag state machine.
//!
//! [`transition`] is a pure function from `(state, input)` to
//! `(next state, effects)`. The foundation performs the effects against its
//! adapter; nothing here touches the presentation surface.
//!
//! # State Machine
//!
//! ```text
//!            Press                 Release
//!   Idle ───────────────► Dragging ────────► Idle   [Release, Commit]
//!          [Acquire, Track]   │  ▲
//!                             │  │ Move [Track]
//!                             └──┘
//!                     Cancel: Dragging ────► Idle   [Release]
//! ```
//!
//! # Invariants
//!
//! 1. Every `Acquire` is followed by exactly one `Release` for the same
//!    move event before the next `Acquire`.
//! 2. `Commit` is only emitted on a `Release` input, after the `Release`
//!    effect, and never after `Cancel`.
//! 3. Inputs that do not apply to the current state produce no effects.

use crate::event::{EventType, PointerEvent};

/// An active pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Page x of the press that started the session.
    pub start_x: f64,
    /// Page x of the most recent tracked event.
    pub last_x: f64,
    /// Body-level move event registered for this session.
    pub move_event: EventType,
    /// Pointer or touch identifier that owns the session, if known.
    pub pointer_id: Option<u32>,
}

impl DragSession {
    fn owns(&self, event: &PointerEvent) -> bool {
        match (self.pointer_id, event.resolved_pointer_id()) {
            (Some(owner), Some(id)) => owner == id,
            _ => true,
        }
    }

    fn released_by(&self, event: &PointerEvent) -> bool {
        self.pointer_id.is_none_or(|owner| event.ends_pointer(owner))
    }
}

/// Drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    /// Whether a session is active.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}

/// Inputs to the drag machine.
#[derive(Debug, Clone, Copy)]
pub enum DragInput<'a> {
    /// A down event on the root or thumb.
    Press(&'a PointerEvent),
    /// A body-level move event.
    Move(&'a PointerEvent),
    /// A body-level up or cancel event.
    Release(&'a PointerEvent),
    /// Programmatic teardown (disable, destroy).
    Cancel,
}

/// Side effects the foundation must perform, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    /// Register body listeners: `move_event` plus every up event.
    Acquire { move_event: EventType },
    /// Recompute the value from a page x coordinate.
    Track { page_x: f64 },
    /// Deregister the listeners registered by the matching `Acquire`.
    Release { move_event: EventType },
    /// Emit the `change` notification.
    Commit,
}

/// Advance the drag machine.
#[must_use]
pub fn transition(state: DragState, input: DragInput<'_>) -> (DragState, Vec<DragEffect>) {
    match (state, input) {
        (DragState::Idle, DragInput::Press(event)) => {
            let Some(move_event) = event.event_type.move_for() else {
                return (state, Vec::new());
            };
            let page_x = event.resolved_page_x();
            let session = DragSession {
                start_x: page_x,
                last_x: page_x,
                move_event,
                pointer_id: event.resolved_pointer_id(),
            };
            (
                DragState::Dragging(session),
                vec![DragEffect::Acquire { move_event }, DragEffect::Track { page_x }],
            )
        }
        // A second down event for the same gesture (mouse + pointer
        // compatibility events) keeps the existing listeners.
        (DragState::Dragging(session), DragInput::Press(event) | DragInput::Move(event)) => {
            if !session.owns(event) {
                return (state, Vec::new());
            }
            let page_x = event.resolved_page_x();
            (
                DragState::Dragging(DragSession {
                    last_x: page_x,
                    ..session
                }),
                vec![DragEffect::Track { page_x }],
            )
        }
        (DragState::Dragging(session), DragInput::Release(event)) => {
            if !session.released_by(event) {
                return (state, Vec::new());
            }
            (
                DragState::Idle,
                vec![
                    DragEffect::Release {
                        move_event: session.move_event,
                    },
                    DragEffect::Commit,
                ],
            )
        }
        (DragState::Dragging(session), DragInput::Cancel) => (
            DragState::Idle,
            vec![DragEffect::Release {
                move_event: session.move_event,
            }],
        ),
        (DragState::Idle, DragInput::Move(_) | DragInput::Release(_) | DragInput::Cancel) => {
            (state, Vec::new())
        }
    }
}
