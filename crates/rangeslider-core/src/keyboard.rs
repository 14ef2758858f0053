#![forbid(unsafe_code)]

//! Keyboard adjustment.
//!
//! Each recognised key press is an atomic commit: the foundation applies the
//! target value and emits `input`, then `change` when the value moved.

use crate::config::SliderConfig;
use crate::event::KeyCode;
use crate::range::ValueRange;

/// What a key does to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Decrement,
    Increment,
    PageDecrement,
    PageIncrement,
    ToMin,
    ToMax,
}

impl KeyAction {
    /// Resolve a key, mirroring Left/Right under RTL.
    #[must_use]
    pub const fn from_key(code: KeyCode, rtl: bool) -> Option<Self> {
        let action = match code {
            KeyCode::Left if rtl => Self::Increment,
            KeyCode::Right if rtl => Self::Decrement,
            KeyCode::Left | KeyCode::Down => Self::Decrement,
            KeyCode::Right | KeyCode::Up => Self::Increment,
            KeyCode::Home => Self::ToMin,
            KeyCode::End => Self::ToMax,
            KeyCode::PageUp => Self::PageIncrement,
            KeyCode::PageDown => Self::PageDecrement,
            KeyCode::Char(_) | KeyCode::Other => return None,
        };
        Some(action)
    }

    /// Unconstrained target value for this action.
    #[must_use]
    pub fn target(self, value: f64, range: &ValueRange, config: &SliderConfig) -> f64 {
        let delta = if range.is_discrete() {
            range.step()
        } else {
            config.default_key_step
        };
        match self {
            Self::Decrement => value - delta,
            Self::Increment => value + delta,
            Self::PageDecrement => value - delta * config.page_factor,
            Self::PageIncrement => value + delta * config.page_factor,
            Self::ToMin => range.min(),
            Self::ToMax => range.max(),
        }
    }
}
