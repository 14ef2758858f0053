#![forbid(unsafe_code)]

//! Value range math: clamping, quantization, and fractions.
//!
//! # Invariants
//!
//! 1. `min <= max`, both finite, and `max - min` is finite.
//! 2. `step >= 0` and finite; `step == 0` means continuous.
//! 3. [`ValueRange::constrain`] never returns a value outside `[min, max]`
//!    and never returns NaN or `-0.0`.
//! 4. In discrete mode every constrained value is `min + k * step` for some
//!    integer `k`, except `max` itself, which is always reachable.

use crate::constants::numbers;
use crate::error::SliderError;

/// Validated `(min, max, step)` triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: numbers::DEFAULT_MIN,
            max: numbers::DEFAULT_MAX,
            step: 0.0,
        }
    }
}

impl ValueRange {
    /// Build a range, rejecting non-finite numbers and `min > max`.
    ///
    /// A step of zero or less selects continuous mode.
    ///
    /// # Errors
    ///
    /// [`SliderError::NonFinite`] for NaN/infinite input or a span that
    /// overflows, and [`SliderError::InvertedRange`] when `min > max`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, SliderError> {
        let min = finite("min", min)?;
        let max = finite("max", max)?;
        let step = normalize_step(step)?;
        if min > max {
            return Err(SliderError::InvertedRange { min, max });
        }
        Self { min, max, step }.checked_span()
    }

    #[inline]
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// `max - min`.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether values snap to multiples of `step`.
    #[inline]
    #[must_use]
    pub fn is_discrete(&self) -> bool {
        self.step > 0.0
    }

    /// Snap to the nearest `min + k * step`; identity in continuous mode.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        if !self.is_discrete() {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        self.min + steps * self.step
    }

    /// Clamp into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Bring an arbitrary value into the range.
    ///
    /// Returns `None` for NaN. Infinities clamp to the nearest bound. Values
    /// exactly on a bound skip quantization so an off-grid `max` stays
    /// reachable.
    #[must_use]
    pub fn constrain(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let on_boundary = value == self.min || value == self.max;
        let snapped = if on_boundary || value.is_infinite() {
            value
        } else {
            self.quantize(value)
        };
        // `+ 0.0` turns -0.0 into 0.0.
        Some(self.clamp(snapped) + 0.0)
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    ///
    /// A zero-width range maps everything to `0`.
    #[must_use]
    pub fn fraction_of(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Unquantized value at `fraction` (clamped to `[0, 1]`).
    #[must_use]
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + fraction.clamp(0.0, 1.0) * self.span()
    }

    /// Copy with a new minimum.
    ///
    /// # Errors
    ///
    /// [`SliderError::NonFinite`] (including an overflowing span) or
    /// [`SliderError::MinAboveMax`].
    pub fn with_min(self, min: f64) -> Result<Self, SliderError> {
        let min = finite("min", min)?;
        if min > self.max {
            return Err(SliderError::MinAboveMax { min, max: self.max });
        }
        Self { min, ..self }.checked_span()
    }

    /// Copy with a new maximum.
    ///
    /// # Errors
    ///
    /// [`SliderError::NonFinite`] (including an overflowing span) or
    /// [`SliderError::MaxBelowMin`].
    pub fn with_max(self, max: f64) -> Result<Self, SliderError> {
        let max = finite("max", max)?;
        if max < self.min {
            return Err(SliderError::MaxBelowMin { max, min: self.min });
        }
        Self { max, ..self }.checked_span()
    }

    /// Copy with a new step; zero or negative selects continuous mode.
    ///
    /// # Errors
    ///
    /// [`SliderError::NonFinite`] for NaN/infinite steps.
    pub fn with_step(self, step: f64) -> Result<Self, SliderError> {
        Ok(Self {
            step: normalize_step(step)?,
            ..self
        })
    }

    fn checked_span(self) -> Result<Self, SliderError> {
        finite("span", self.span())?;
        Ok(self)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, SliderError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SliderError::NonFinite { field, value })
    }
}

fn normalize_step(step: f64) -> Result<f64, SliderError> {
    let step = finite("step", step)?;
    Ok(if step > 0.0 { step } else { 0.0 })
}
