#![forbid(unsafe_code)]

//! Errors surfaced by the slider.
//!
//! Disabled-state interaction is not an error: the foundation swallows it.

use thiserror::Error;

/// Errors raised by slider construction and range mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// A required sub-element is missing from the markup.
    #[error("slider component requires a {selector} element")]
    MissingElement { selector: &'static str },

    /// The requested minimum lies above the current maximum.
    #[error("cannot set min to {min}: it exceeds the slider's maximum of {max}")]
    MinAboveMax { min: f64, max: f64 },

    /// The requested maximum lies below the current minimum.
    #[error("cannot set max to {max}: it is below the slider's minimum of {min}")]
    MaxBelowMin { max: f64, min: f64 },

    /// A joint range update with `min > max`.
    #[error("invalid range: min {min} exceeds max {max}")]
    InvertedRange { min: f64, max: f64 },

    /// NaN or infinity passed where a finite number is required.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}
