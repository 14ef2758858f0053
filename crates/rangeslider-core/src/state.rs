#![forbid(unsafe_code)]

//! Numeric slider state, as carried by `input`/`change` notifications.

use crate::constants::numbers;
use crate::range::ValueRange;

/// Snapshot of the slider's numeric state.
///
/// After any committed mutation `min <= value <= max` holds, and in discrete
/// mode `value` sits on the `min + k * step` grid (or exactly on `max`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// `0` means continuous.
    pub step: f64,
    pub disabled: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: numbers::DEFAULT_MIN,
            max: numbers::DEFAULT_MAX,
            step: 0.0,
            disabled: false,
        }
    }
}

impl SliderState {
    /// Whether values snap to multiples of `step`.
    #[inline]
    #[must_use]
    pub fn is_discrete(&self) -> bool {
        self.step > 0.0
    }

    /// Build a snapshot from a validated range.
    #[must_use]
    pub fn from_range(range: &ValueRange, value: f64, disabled: bool) -> Self {
        Self {
            value,
            min: range.min(),
            max: range.max(),
            step: range.step(),
            disabled,
        }
    }

    /// The range view of this snapshot.
    ///
    /// Snapshots coming out of the foundation always hold a valid range;
    /// hand-built ones with inverted or non-finite bounds fall back to the
    /// default range.
    #[must_use]
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.min, self.max, self.step).unwrap_or_default()
    }
}
