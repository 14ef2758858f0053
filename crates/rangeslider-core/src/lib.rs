#![cfg_attr(not(test), forbid(unsafe_code))]

//! Core: the behavioral foundation of a range slider.
//!
//! # Role in rangeslider
//! `rangeslider-core` owns every piece of slider behavior that does not depend
//! on a concrete rendering surface: the numeric state (value, min, max, step),
//! the pointer drag and keyboard state machine, the pixel/value geometry, and
//! the track marker layout. It reaches the outside world only through the
//! [`SliderAdapter`](adapter::SliderAdapter) capability trait.
//!
//! # Primary responsibilities
//! - **SliderFoundation**: applies mutations, keeps `min <= value <= max`,
//!   emits `input`/`change` notifications.
//! - **Drag machine**: `Idle`/`Dragging` as an explicit enum with a pure
//!   transition function; body listeners are acquired and released in pairs.
//! - **Geometry**: pointer x → fraction → value and the inverse, with RTL
//!   mirroring and discrete quantization.
//! - **Markers**: a pure layout function from the current range to the
//!   number of marker placeholders.
//!
//! # How it fits in the system
//! The `rangeslider` crate binds a markup tree to a [`SliderAdapter`] and
//! forwards platform events into [`SliderFoundation::handle_event`]. Nothing
//! here performs deferred work: every transition completes inside the call
//! that triggered it.
//!
//! [`SliderAdapter`]: adapter::SliderAdapter
//! [`SliderFoundation::handle_event`]: foundation::SliderFoundation::handle_event

pub mod adapter;
pub mod config;
pub mod constants;
pub mod drag;
pub mod error;
pub mod event;
pub mod foundation;
pub mod geometry;
pub mod keyboard;
pub mod marker;
pub mod range;
pub mod state;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use adapter::{Handler, ListenerTarget, SliderAdapter};
pub use config::SliderConfig;
pub use error::SliderError;
pub use event::{Event, EventType, KeyCode, KeyEvent, KeyEventKind, PointerEvent};
pub use foundation::{EventResult, SliderFoundation};
pub use geometry::BoundingRect;
pub use range::ValueRange;
pub use state::SliderState;
