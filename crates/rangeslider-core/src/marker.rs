#![forbid(unsafe_code)]

//! Track marker layout.
//!
//! Markers are regenerated wholesale from the current range; nothing is
//! patched incrementally. The layout is a pure function of `(min, max, step)`.

use crate::constants::numbers;
use crate::range::ValueRange;

/// Tolerance used when deciding whether `span / step` is integral.
const INTEGRAL_EPSILON: f64 = 1e-9;

#[allow(clippy::cast_precision_loss)]
const MAX_WHOLE_STEPS: f64 = numbers::MAX_TRACK_MARKERS as f64;

/// How many marker placeholders to materialize and how to size the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMarkerLayout {
    /// Number of marker placeholders: `floor((max - min) / step)`.
    pub count: usize,
    /// `flex-grow` for the last marker when the span is not a whole number of
    /// steps, so it stretches over the remainder.
    pub last_marker_flex_grow: Option<f64>,
}

impl TrackMarkerLayout {
    /// Layout for `range`, or `None` when no marker should exist
    /// (continuous mode, a step wider than the whole span, or more than
    /// [`numbers::MAX_TRACK_MARKERS`] steps).
    #[must_use]
    pub fn for_range(range: &ValueRange) -> Option<Self> {
        if !range.is_discrete() {
            return None;
        }
        let steps = range.span() / range.step();
        let nearest = steps.round();
        let integral = (steps - nearest).abs() < INTEGRAL_EPSILON;
        let whole = if integral { nearest } else { steps.floor() };
        if !(1.0..=MAX_WHOLE_STEPS).contains(&whole) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = whole as usize;
        let last_marker_flex_grow = (!integral).then(|| 1.0 + (steps - whole));
        Some(Self {
            count,
            last_marker_flex_grow,
        })
    }
}
