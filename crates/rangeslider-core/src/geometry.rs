#![forbid(unsafe_code)]

//! Geometric primitives and the pointer/value transforms.
//!
//! Pointer → value: `fraction = (x - rect.left) / rect.width`, clamped to
//! `[0, 1]`, mirrored under RTL, mapped into the range and quantized.
//!
//! Value → pixels is always recomputed from the authoritative value; nothing
//! in here caches.

use crate::range::ValueRange;

/// Bounding rectangle of the slider root, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl BoundingRect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether pointer coordinates can be mapped onto this rectangle.
    #[inline]
    #[must_use]
    pub fn has_extent(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Fraction of the track under page coordinate `x`, mirrored under RTL.
///
/// Returns `None` when the rectangle has no horizontal extent or `x` is NaN.
#[must_use]
pub fn fraction_from_x(rect: &BoundingRect, x: f64, rtl: bool) -> Option<f64> {
    if !rect.has_extent() || x.is_nan() {
        return None;
    }
    let fraction = ((x - rect.left) / rect.width).clamp(0.0, 1.0);
    Some(if rtl { 1.0 - fraction } else { fraction })
}

/// Value under page coordinate `x`, quantized and clamped.
#[must_use]
pub fn value_from_x(rect: &BoundingRect, range: &ValueRange, x: f64, rtl: bool) -> Option<f64> {
    let fraction = fraction_from_x(rect, x, rtl)?;
    range.constrain(range.value_at(fraction))
}

/// Horizontal position of `value` as a fraction of the track width, measured
/// from the left edge. Two sliders differing only in direction sum to `1`.
#[must_use]
pub fn pixel_fraction(range: &ValueRange, value: f64, rtl: bool) -> f64 {
    let fraction = range.fraction_of(value);
    if rtl { 1.0 - fraction } else { fraction }
}

/// Thumb translation in pixels from the left edge of the track.
#[must_use]
pub fn thumb_offset_px(rect: &BoundingRect, range: &ValueRange, value: f64, rtl: bool) -> f64 {
    let width = if rect.has_extent() { rect.width } else { 0.0 };
    pixel_fraction(range, value, rtl) * width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64, step: f64) -> ValueRange {
        ValueRange::new(min, max, step).expect("valid range")
    }

    #[test]
    fn rect_edges_and_contains() {
        let rect = BoundingRect::new(10.0, 5.0, 200.0, 20.0);
        assert_eq!(rect.right(), 210.0);
        assert_eq!(rect.bottom(), 25.0);
        assert!(rect.contains(10.0, 5.0));
        assert!(!rect.contains(210.0, 5.0));
    }

    #[test]
    fn fraction_clamps_outside_track() {
        let rect = BoundingRect::new(100.0, 0.0, 200.0, 10.0);
        assert_eq!(fraction_from_x(&rect, 200.0, false), Some(0.5));
        assert_eq!(fraction_from_x(&rect, 0.0, false), Some(0.0));
        assert_eq!(fraction_from_x(&rect, 900.0, false), Some(1.0));
    }

    #[test]
    fn rtl_mirrors_fraction() {
        let rect = BoundingRect::new(0.0, 0.0, 100.0, 10.0);
        assert_eq!(fraction_from_x(&rect, 25.0, true), Some(0.75));
    }

    #[test]
    fn zero_width_rect_maps_nothing() {
        let rect = BoundingRect::new(0.0, 0.0, 0.0, 10.0);
        assert_eq!(fraction_from_x(&rect, 5.0, false), None);
        assert_eq!(value_from_x(&rect, &range(0.0, 10.0, 0.0), 5.0, false), None);
        assert_eq!(thumb_offset_px(&rect, &range(0.0, 10.0, 0.0), 5.0, false), 0.0);
    }

    #[test]
    fn value_from_x_quantizes() {
        let rect = BoundingRect::new(0.0, 0.0, 100.0, 10.0);
        let r = range(0.0, 10.0, 2.0);
        assert_eq!(value_from_x(&rect, &r, 47.0, false), Some(4.0));
        assert_eq!(value_from_x(&rect, &r, 51.0, false), Some(6.0));
    }

    #[test]
    fn thumb_offset_is_inverse_of_pointer_mapping() {
        let rect = BoundingRect::new(40.0, 0.0, 300.0, 10.0);
        let r = range(-50.0, 50.0, 0.0);
        for rtl in [false, true] {
            let offset = thumb_offset_px(&rect, &r, 20.0, rtl);
            let back = value_from_x(&rect, &r, rect.left + offset, rtl).expect("mapped");
            assert!((back - 20.0).abs() < 1e-9, "rtl={rtl} back={back}");
        }
    }

    #[test]
    fn opposite_directions_sum_to_one() {
        let r = range(0.0, 80.0, 0.0);
        let ltr = pixel_fraction(&r, 30.0, false);
        let rtl = pixel_fraction(&r, 30.0, true);
        assert!((ltr + rtl - 1.0).abs() < 1e-12);
    }
}
