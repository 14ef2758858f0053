#![forbid(unsafe_code)]

//! The slider component.
//!
//! [`Slider`] binds an [`ElementTree`] to a [`SliderFoundation`], reads the
//! initial state declared on the root's ARIA attributes, and exposes the
//! property surface hosts use.
//!
//! # Lifecycle
//!
//! ```text
//! attach_to(tree) ─▶ bind elements ─▶ foundation.init() ─▶ sync from markup
//!        │                                                      │
//!        └── MissingElement / range error ◀─────────────────────┘
//!
//! destroy() ─▶ foundation.destroy() ─▶ tree handed back
//! ```

use rangeslider_core::constants::strings;
use rangeslider_core::{
    Event, EventResult, Handler, SliderAdapter, SliderConfig, SliderError, SliderFoundation,
    SliderState,
};

use crate::host::HostAdapter;
use crate::memory::{MemoryTree, NodeId};
use crate::tree::{ElementTree, EventTarget};

/// A range slider attached to a markup tree.
#[derive(Debug)]
pub struct Slider<T: ElementTree> {
    foundation: SliderFoundation<HostAdapter<T>>,
}

impl<T: ElementTree> Slider<T> {
    /// Attach to `tree` with default configuration.
    ///
    /// # Errors
    ///
    /// See [`attach_with_config`](Self::attach_with_config).
    pub fn attach_to(tree: T) -> Result<Self, SliderError> {
        Self::attach_with_config(tree, SliderConfig::default())
    }

    /// Attach to `tree`, register listeners, and adopt the state declared by
    /// `aria-valuenow`, `aria-valuemin`, `aria-valuemax`, `data-step`, and
    /// `aria-disabled` on the root.
    ///
    /// # Errors
    ///
    /// - [`SliderError::MissingElement`] when a required sub-element is absent.
    /// - [`SliderError::InvertedRange`] when the declared minimum exceeds the
    ///   declared maximum. Listeners registered so far are removed first.
    pub fn attach_with_config(tree: T, config: SliderConfig) -> Result<Self, SliderError> {
        let adapter = HostAdapter::bind(tree)?;
        let mut foundation = SliderFoundation::with_config(adapter, config);
        foundation.init();
        let mut slider = Self { foundation };
        if let Err(err) = slider.initial_sync_with_dom() {
            slider.foundation.destroy();
            return Err(err);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "slider.attach",
            value = slider.value(),
            min = slider.min(),
            max = slider.max(),
            step = slider.step()
        );
        Ok(slider)
    }

    fn initial_sync_with_dom(&mut self) -> Result<(), SliderError> {
        let adapter = self.foundation.adapter();
        let value_now = parse_number_attribute(adapter, strings::ARIA_VALUENOW);
        let min = parse_number_attribute(adapter, strings::ARIA_VALUEMIN)
            .unwrap_or(self.foundation.min());
        let max = parse_number_attribute(adapter, strings::ARIA_VALUEMAX)
            .unwrap_or(self.foundation.max());
        let step = parse_number_attribute(adapter, strings::STEP_DATA_ATTR);
        let disabled = adapter
            .get_attribute(strings::ARIA_DISABLED)
            .is_some_and(|raw| raw != "false");

        self.foundation.set_range(min, max)?;
        if let Some(step) = step {
            self.foundation.set_step(step)?;
        }
        // A declared zero keeps the clamped default.
        if let Some(value) = value_now.filter(|v| *v != 0.0) {
            self.foundation.set_value(value);
        }
        self.foundation.set_disabled(disabled);
        self.foundation.setup_track_marker();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    #[must_use]
    pub fn value(&self) -> f64 {
        self.foundation.value()
    }

    /// Set the value; fires `input`.
    pub fn set_value(&mut self, value: f64) {
        self.foundation.set_value(value);
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.foundation.min()
    }

    /// # Errors
    ///
    /// Propagates [`SliderFoundation::set_min`] errors.
    pub fn set_min(&mut self, min: f64) -> Result<(), SliderError> {
        self.foundation.set_min(min)
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.foundation.max()
    }

    /// # Errors
    ///
    /// Propagates [`SliderFoundation::set_max`] errors.
    pub fn set_max(&mut self, max: f64) -> Result<(), SliderError> {
        self.foundation.set_max(max)
    }

    /// Set both bounds together.
    ///
    /// # Errors
    ///
    /// Propagates [`SliderFoundation::set_range`] errors.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), SliderError> {
        self.foundation.set_range(min, max)
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.foundation.step()
    }

    /// # Errors
    ///
    /// Propagates [`SliderFoundation::set_step`] errors.
    pub fn set_step(&mut self, step: f64) -> Result<(), SliderError> {
        self.foundation.set_step(step)
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.foundation.is_disabled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.foundation.set_disabled(disabled);
    }

    /// Snapshot of the numeric state.
    #[must_use]
    pub fn state(&self) -> SliderState {
        self.foundation.state()
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Re-measure the root and reposition the thumb, fill, and markers.
    pub fn layout(&mut self) {
        self.foundation.layout();
    }

    /// Raise the value by `amount`, or by one step (1 when continuous).
    pub fn step_up(&mut self, amount: Option<f64>) {
        let amount = amount.unwrap_or_else(|| self.default_step_amount());
        self.set_value(self.value() + amount);
    }

    /// Lower the value by `amount`, or by one step (1 when continuous).
    pub fn step_down(&mut self, amount: Option<f64>) {
        let amount = amount.unwrap_or_else(|| self.default_step_amount());
        self.set_value(self.value() - amount);
    }

    fn default_step_amount(&self) -> f64 {
        if self.step() > 0.0 { self.step() } else { 1.0 }
    }

    /// Route an event delivered to the listener registered under `handler`.
    pub fn handle_event(&mut self, handler: Handler, event: &Event) -> EventResult {
        self.foundation.handle_event(handler, event)
    }

    /// Deregister every listener and hand the tree back.
    pub fn destroy(mut self) -> T {
        self.foundation.destroy();
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slider.destroy", value = self.value());
        self.foundation.into_adapter().into_tree()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn tree(&self) -> &T {
        self.foundation.adapter().tree()
    }

    /// Mutable access to the tree, for host-side changes such as resizing.
    pub fn tree_mut(&mut self) -> &mut T {
        self.foundation.adapter_mut().tree_mut()
    }

    #[must_use]
    pub fn foundation(&self) -> &SliderFoundation<HostAdapter<T>> {
        &self.foundation
    }

    /// The thumb container element.
    #[must_use]
    pub fn thumb_container(&self) -> T::Node {
        self.foundation.adapter().thumb_container()
    }
}

impl Slider<MemoryTree> {
    /// Dispatch `event` at `target` and let it bubble, invoking every
    /// listener it meets. Results are returned in invocation order.
    pub fn dispatch(&mut self, target: EventTarget<NodeId>, event: &Event) -> Vec<EventResult> {
        let mut results = Vec::new();
        for hop in self.tree().propagation_path(target) {
            // Listeners are looked up when the event reaches each hop.
            for handler in self.tree().listeners_for(hop, event.event_type()) {
                results.push(self.handle_event(handler, event));
            }
        }
        results
    }
}

/// Leading-number parse of an attribute; absent, unparsable, or non-finite
/// values read as `None`.
fn parse_number_attribute<A: SliderAdapter>(adapter: &A, name: &str) -> Option<f64> {
    adapter
        .get_attribute(name)
        .and_then(|raw| parse_leading_number(&raw))
}

fn parse_leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let bytes = trimmed.as_bytes();
    while end < bytes.len() {
        match bytes[end] {
            b'+' | b'-' if end == 0 => {}
            b'+' | b'-' if seen_exp && matches!(bytes[end - 1], b'e' | b'E') => {}
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => seen_exp = true,
            _ => break,
        }
        end += 1;
    }
    // Back off a dangling exponent ("3e", "3e-").
    let mut candidate = &trimmed[..end];
    while !candidate.is_empty() {
        if let Ok(value) = candidate.parse::<f64>() {
            return value.is_finite().then_some(value);
        }
        candidate = &candidate[..candidate.len() - 1];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_number_parse() {
        assert_eq!(parse_leading_number("42"), Some(42.0));
        assert_eq!(parse_leading_number("  -3.5px"), Some(-3.5));
        assert_eq!(parse_leading_number("1e2"), Some(100.0));
        assert_eq!(parse_leading_number("7e"), Some(7.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("-"), None);
    }

    #[test]
    fn overflowing_number_is_rejected() {
        assert_eq!(parse_leading_number("1e999"), None);
    }

    #[test]
    fn step_defaults_to_one_when_continuous() {
        let mut slider = Slider::attach_to(MemoryTree::slider_markup()).unwrap();
        slider.set_value(50.0);
        slider.step_up(None);
        assert_eq!(slider.value(), 51.0);
        slider.step_down(Some(10.0));
        assert_eq!(slider.value(), 41.0);
    }

    #[test]
    fn step_uses_discrete_step() {
        let mut slider = Slider::attach_to(MemoryTree::slider_markup()).unwrap();
        slider.set_step(5.0).unwrap();
        slider.set_value(50.0);
        slider.step_up(None);
        assert_eq!(slider.value(), 55.0);
        slider.step_down(None);
        slider.step_down(None);
        assert_eq!(slider.value(), 45.0);
    }
}
