#![forbid(unsafe_code)]

//! The slider foundation.
//!
//! [`SliderFoundation`] owns the numeric state and the interaction state
//! machine, and drives a [`SliderAdapter`]. All work happens synchronously
//! inside the call that triggered it.
//!
//! # Notifications
//!
//! - `input` fires on every programmatic [`set_value`](SliderFoundation::set_value),
//!   on every drag update that moves the value, and on every recognised key.
//! - `change` fires once per drag release and once per key press that moved
//!   the value. A drag cancelled by disabling never fires `change`.
//!
//! # Failure Modes
//!
//! - Pointer and keyboard input while disabled is ignored without
//!   notification.
//! - NaN values are rejected before reaching the adapter; range setters
//!   return [`SliderError`] and leave state untouched.

use bitflags::bitflags;

use crate::adapter::{Handler, SliderAdapter};
use crate::config::SliderConfig;
use crate::constants::{css_classes, strings};
use crate::drag::{self, DragEffect, DragInput, DragState};
use crate::error::SliderError;
use crate::event::{Event, EventType, KeyEvent, KeyEventKind, PointerEvent};
use crate::geometry::{self, BoundingRect};
use crate::keyboard::KeyAction;
use crate::marker::TrackMarkerLayout;
use crate::range::ValueRange;
use crate::state::SliderState;

/// Outcome of routing an event into the foundation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event had no effect.
    Ignored,
    /// The event was handled; the platform default may proceed.
    Handled,
    /// The event was handled and the platform default should be prevented.
    Consumed,
}

bitflags! {
    /// Visual state mirrored onto root classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct VisualFlags: u8 {
        const ACTIVE     = 0b0001;
        const IN_TRANSIT = 0b0010;
        const FOCUS      = 0b0100;
        const DISABLED   = 0b1000;
    }
}

impl VisualFlags {
    const fn class_name(self) -> &'static str {
        if self.contains(Self::ACTIVE) {
            css_classes::ACTIVE
        } else if self.contains(Self::IN_TRANSIT) {
            css_classes::IN_TRANSIT
        } else if self.contains(Self::FOCUS) {
            css_classes::FOCUS
        } else {
            css_classes::DISABLED
        }
    }
}

/// When a value update should fire `input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notify {
    /// Always, even when the value did not move.
    Always,
    /// Only when the value moved; an unmoved value skips the UI update too.
    OnChange,
    /// Never; the UI is still re-asserted.
    Silent,
}

/// Behavioral core of a range slider.
pub struct SliderFoundation<A: SliderAdapter> {
    adapter: A,
    config: SliderConfig,
    range: ValueRange,
    value: f64,
    disabled: bool,
    rect: BoundingRect,
    drag: DragState,
    flags: VisualFlags,
    saved_tab_index: Option<i32>,
    has_track_marker: bool,
    handling_thumb_target_event: bool,
    prevent_focus_state: bool,
    transition_end_registered: bool,
    initialized: bool,
}

impl<A: SliderAdapter> std::fmt::Debug for SliderFoundation<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderFoundation")
            .field("value", &self.value)
            .field("range", &self.range)
            .field("disabled", &self.disabled)
            .field("dragging", &self.drag.is_dragging())
            .finish_non_exhaustive()
    }
}

impl<A: SliderAdapter> SliderFoundation<A> {
    /// Create a foundation with default configuration.
    ///
    /// No listener is registered until [`init`](Self::init).
    #[must_use]
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, SliderConfig::default())
    }

    /// Create a foundation with the given configuration.
    #[must_use]
    pub fn with_config(adapter: A, config: SliderConfig) -> Self {
        Self {
            adapter,
            config,
            range: ValueRange::default(),
            value: 0.0,
            disabled: false,
            rect: BoundingRect::default(),
            drag: DragState::Idle,
            flags: VisualFlags::empty(),
            saved_tab_index: None,
            has_track_marker: false,
            handling_thumb_target_event: false,
            prevent_focus_state: false,
            transition_end_registered: false,
            initialized: false,
        }
    }

    /// Register listeners, read markup declarations, and lay out.
    ///
    /// Calling `init` twice is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.has_track_marker = self.adapter.has_class(css_classes::HAS_TRACK_MARKER);
        if self.adapter.has_class(css_classes::IS_DISCRETE) && !self.range.is_discrete() {
            if let Ok(range) = self.range.with_step(1.0) {
                self.range = range;
            }
        }

        for event_type in EventType::DOWN {
            self.adapter
                .register_interaction_handler(event_type, Handler::InteractionStart);
            self.adapter.register_thumb_container_interaction_handler(
                event_type,
                Handler::ThumbContainerPointer,
            );
        }
        self.adapter
            .register_interaction_handler(EventType::KeyDown, Handler::KeyDown);
        self.adapter
            .register_interaction_handler(EventType::Focus, Handler::Focus);
        self.adapter
            .register_interaction_handler(EventType::Blur, Handler::Blur);
        self.adapter.register_resize_handler(Handler::Resize);
        self.initialized = true;

        self.layout();
    }

    /// Tear down every listener this foundation registered.
    pub fn destroy(&mut self) {
        if !self.initialized {
            return;
        }
        self.drive_drag(DragInput::Cancel);
        if self.transition_end_registered {
            self.adapter.deregister_thumb_container_interaction_handler(
                EventType::TransitionEnd,
                Handler::TransitionEnd,
            );
            self.transition_end_registered = false;
        }
        for event_type in EventType::DOWN {
            self.adapter
                .deregister_interaction_handler(event_type, Handler::InteractionStart);
            self.adapter.deregister_thumb_container_interaction_handler(
                event_type,
                Handler::ThumbContainerPointer,
            );
        }
        self.adapter
            .deregister_interaction_handler(EventType::KeyDown, Handler::KeyDown);
        self.adapter
            .deregister_interaction_handler(EventType::Focus, Handler::Focus);
        self.adapter
            .deregister_interaction_handler(EventType::Blur, Handler::Blur);
        self.adapter.deregister_resize_handler(Handler::Resize);
        self.initialized = false;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter, for hosts that need to reconfigure
    /// their surface. The foundation's own bookkeeping is unaffected.
    #[must_use]
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Consume the foundation and return its adapter.
    ///
    /// Listeners are not torn down; call [`destroy`](Self::destroy) first.
    #[must_use]
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Snapshot of the numeric state.
    #[must_use]
    pub fn state(&self) -> SliderState {
        SliderState::from_range(&self.range, self.value, self.disabled)
    }

    #[must_use]
    pub const fn range(&self) -> &ValueRange {
        &self.range
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.range.min()
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.range.max()
    }

    #[must_use]
    pub const fn step(&self) -> f64 {
        self.range.step()
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_discrete(&self) -> bool {
        self.range.is_discrete()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Geometry snapshot used for pointer mapping.
    #[must_use]
    pub const fn bounding_rect(&self) -> BoundingRect {
        self.rect
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Set the value, clamping and quantizing it, and fire `input`.
    ///
    /// `input` fires even when the value does not move. NaN is ignored.
    pub fn set_value(&mut self, value: f64) {
        self.apply_value(value, Notify::Always);
    }

    /// Set the minimum.
    ///
    /// # Errors
    ///
    /// [`SliderError::MinAboveMax`] when `min` exceeds the current maximum
    /// (raise the maximum first, or use [`set_range`](Self::set_range)), and
    /// [`SliderError::NonFinite`] for NaN/infinite input.
    pub fn set_min(&mut self, min: f64) -> Result<(), SliderError> {
        let range = self.range.with_min(min)?;
        self.commit_range(range);
        Ok(())
    }

    /// Set the maximum.
    ///
    /// # Errors
    ///
    /// [`SliderError::MaxBelowMin`] when `max` is below the current minimum,
    /// and [`SliderError::NonFinite`] for NaN/infinite input.
    pub fn set_max(&mut self, max: f64) -> Result<(), SliderError> {
        let range = self.range.with_max(max)?;
        self.commit_range(range);
        Ok(())
    }

    /// Set both bounds at once, validated as a pair.
    ///
    /// # Errors
    ///
    /// [`SliderError::InvertedRange`] when `min > max`, and
    /// [`SliderError::NonFinite`] for NaN/infinite input.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), SliderError> {
        let range = ValueRange::new(min, max, self.range.step())?;
        self.commit_range(range);
        Ok(())
    }

    /// Set the step; zero or negative selects continuous mode.
    ///
    /// # Errors
    ///
    /// [`SliderError::NonFinite`] for NaN/infinite input.
    pub fn set_step(&mut self, step: f64) -> Result<(), SliderError> {
        self.range = self.range.with_step(step)?;
        self.apply_value(self.value, Notify::Silent);
        self.setup_track_marker();
        Ok(())
    }

    /// Enable or disable the slider. Disabling aborts any drag session
    /// without firing `change`.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.set_flag(VisualFlags::DISABLED, disabled);
        if disabled {
            self.cancel_drag();
            if self.saved_tab_index.is_none() {
                self.saved_tab_index = Some(self.adapter.get_tab_index());
            }
            self.adapter.set_attribute(strings::ARIA_DISABLED, "true");
            self.adapter.remove_attribute(strings::TABINDEX);
        } else {
            self.adapter.remove_attribute(strings::ARIA_DISABLED);
            if let Some(tab_index) = self.saved_tab_index.take() {
                self.adapter
                    .set_attribute(strings::TABINDEX, &tab_index.to_string());
            }
        }
    }

    /// Refresh the geometry snapshot and re-derive every pixel position from
    /// the current value. Never changes the value or notifies.
    pub fn layout(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("slider.layout", value = self.value).entered();
        self.rect = self.adapter.compute_bounding_rect();
        self.update_ui_for_current_value();
        self.setup_track_marker();
    }

    /// Regenerate the marker placeholders from the current range.
    ///
    /// Continuous sliders, and sliders without the display-markers class,
    /// end up with no markers.
    pub fn setup_track_marker(&mut self) {
        self.adapter.remove_track_markers();
        if !self.has_track_marker {
            return;
        }
        let Some(layout) = TrackMarkerLayout::for_range(&self.range) else {
            return;
        };
        self.adapter.append_track_markers(layout.count);
        if let Some(grow) = layout.last_marker_flex_grow {
            self.adapter
                .set_last_track_markers_style_property(strings::FLEX_GROW, &grow.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Event routing
    // ------------------------------------------------------------------

    /// Route a platform event delivered to the listener registered under
    /// `handler`.
    pub fn handle_event(&mut self, handler: Handler, event: &Event) -> EventResult {
        match (handler, event) {
            (Handler::InteractionStart, Event::Pointer(pointer)) => self.handle_down(pointer),
            (Handler::ThumbContainerPointer, Event::Pointer(_)) => {
                self.handling_thumb_target_event = true;
                EventResult::Handled
            }
            (Handler::BodyMove, Event::Pointer(pointer)) => self.handle_move(pointer),
            (Handler::BodyUp, Event::Pointer(pointer)) => self.handle_up(pointer),
            (Handler::KeyDown, Event::Key(key)) => self.handle_keydown(key),
            (Handler::Focus, _) => {
                if !self.prevent_focus_state {
                    self.set_flag(VisualFlags::FOCUS, true);
                }
                EventResult::Handled
            }
            (Handler::Blur, _) => {
                self.prevent_focus_state = false;
                self.set_flag(VisualFlags::FOCUS, false);
                EventResult::Handled
            }
            (Handler::Resize, _) => {
                self.layout();
                EventResult::Handled
            }
            (Handler::TransitionEnd, _) => {
                self.set_flag(VisualFlags::IN_TRANSIT, false);
                if self.transition_end_registered {
                    self.adapter.deregister_thumb_container_interaction_handler(
                        EventType::TransitionEnd,
                        Handler::TransitionEnd,
                    );
                    self.transition_end_registered = false;
                }
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_down(&mut self, event: &PointerEvent) -> EventResult {
        let on_track = !std::mem::take(&mut self.handling_thumb_target_event);
        if self.disabled {
            return EventResult::Ignored;
        }
        if !self.drag.is_dragging() {
            self.prevent_focus_state = true;
            self.set_flag(VisualFlags::IN_TRANSIT, on_track);
            self.set_flag(VisualFlags::ACTIVE, true);
            self.rect = self.adapter.compute_bounding_rect();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "slider.drag.start",
                page_x = event.resolved_page_x(),
                on_track
            );
        }
        if self.drive_drag(DragInput::Press(event)) {
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    fn handle_move(&mut self, event: &PointerEvent) -> EventResult {
        if self.drive_drag(DragInput::Move(event)) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn handle_up(&mut self, event: &PointerEvent) -> EventResult {
        if self.drive_drag(DragInput::Release(event)) {
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    fn handle_keydown(&mut self, key: &KeyEvent) -> EventResult {
        if self.disabled || key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }
        let Some(action) = KeyAction::from_key(key.code, self.adapter.is_rtl()) else {
            return EventResult::Ignored;
        };
        self.set_flag(VisualFlags::FOCUS, true);
        let target = action.target(self.value, &self.range, &self.config);
        if self.apply_value(target, Notify::Always) {
            self.adapter.notify_change(&self.state());
        }
        EventResult::Consumed
    }

    fn cancel_drag(&mut self) {
        if self.drive_drag(DragInput::Cancel) {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "slider.drag.cancel", value = self.value);
        }
    }

    /// Advance the drag machine and perform its effects. Returns whether any
    /// effect was produced.
    fn drive_drag(&mut self, input: DragInput<'_>) -> bool {
        let (next, effects) = drag::transition(self.drag, input);
        self.drag = next;
        let produced = !effects.is_empty();
        for effect in effects {
            self.apply_drag_effect(effect);
        }
        produced
    }

    fn apply_drag_effect(&mut self, effect: DragEffect) {
        match effect {
            DragEffect::Acquire { move_event } => {
                self.adapter
                    .register_body_interaction_handler(move_event, Handler::BodyMove);
                for up in EventType::UP {
                    self.adapter
                        .register_body_interaction_handler(up, Handler::BodyUp);
                }
            }
            DragEffect::Track { page_x } => {
                let rtl = self.adapter.is_rtl();
                if let Some(value) = geometry::value_from_x(&self.rect, &self.range, page_x, rtl) {
                    self.apply_value(value, Notify::OnChange);
                }
            }
            DragEffect::Release { move_event } => {
                self.adapter
                    .deregister_body_interaction_handler(move_event, Handler::BodyMove);
                for up in EventType::UP {
                    self.adapter
                        .deregister_body_interaction_handler(up, Handler::BodyUp);
                }
                self.set_flag(VisualFlags::ACTIVE, false);
            }
            DragEffect::Commit => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "slider.drag.commit", value = self.value);
                self.adapter.notify_change(&self.state());
            }
        }
    }

    // ------------------------------------------------------------------
    // Value application and UI
    // ------------------------------------------------------------------

    fn commit_range(&mut self, range: ValueRange) {
        let min_changed = range.min() != self.range.min();
        let max_changed = range.max() != self.range.max();
        self.range = range;
        self.apply_value(self.value, Notify::Silent);
        if min_changed {
            self.adapter
                .set_attribute(strings::ARIA_VALUEMIN, &self.range.min().to_string());
        }
        if max_changed {
            self.adapter
                .set_attribute(strings::ARIA_VALUEMAX, &self.range.max().to_string());
        }
        self.setup_track_marker();
    }

    /// Constrain and store `value`, re-derive the UI, and notify per
    /// `notify`. Returns whether the stored value moved.
    fn apply_value(&mut self, value: f64, notify: Notify) -> bool {
        let Some(value) = self.range.constrain(value) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = "slider.value.rejected", reason = "nan");
            return false;
        };
        let moved = value != self.value;
        if !moved && notify == Notify::OnChange {
            return false;
        }
        self.value = value;
        self.adapter
            .set_attribute(strings::ARIA_VALUENOW, &value.to_string());
        self.update_ui_for_current_value();
        if notify == Notify::Always || (moved && notify == Notify::OnChange) {
            self.adapter.notify_input(&self.state());
        }
        moved
    }

    fn update_ui_for_current_value(&mut self) {
        let rtl = self.adapter.is_rtl();
        let fraction = self.range.fraction_of(self.value);
        let translate_px = geometry::thumb_offset_px(&self.rect, &self.range, self.value, rtl);

        if self.flags.contains(VisualFlags::IN_TRANSIT) && !self.transition_end_registered {
            self.adapter.register_thumb_container_interaction_handler(
                EventType::TransitionEnd,
                Handler::TransitionEnd,
            );
            self.transition_end_registered = true;
        }

        self.adapter.set_thumb_container_style_property(
            strings::TRANSFORM,
            &format!("translateX({translate_px}px) translateX(-50%)"),
        );
        self.adapter
            .set_track_style_property(strings::TRANSFORM, &format!("scaleX({fraction})"));
        self.adapter.set_marker_value(&self.value.to_string());
    }

    fn set_flag(&mut self, flag: VisualFlags, on: bool) {
        self.flags.set(flag, on);
        if on {
            self.adapter.add_class(flag.class_name());
        } else {
            self.adapter.remove_class(flag.class_name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ListenerTarget;
    use crate::event::{KeyCode, TouchPoint};
    use crate::testing::{AdapterCall, RecordingAdapter, dispatch};
    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing::Subscriber;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::Layer;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    fn pointer(event_type: EventType, x: f64) -> Event {
        Event::Pointer(PointerEvent::new(event_type, x))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    /// Foundation over a 100px-wide root at x = 0, initialized.
    fn slider() -> SliderFoundation<RecordingAdapter> {
        let adapter = RecordingAdapter::new().with_rect(BoundingRect::new(0.0, 0.0, 100.0, 20.0));
        let mut foundation = SliderFoundation::new(adapter);
        foundation.init();
        foundation.adapter_mut().clear_calls();
        foundation
    }

    fn press_track(f: &mut SliderFoundation<RecordingAdapter>, event_type: EventType, x: f64) {
        dispatch(f, ListenerTarget::Root, &pointer(event_type, x));
    }

    #[test]
    fn init_registers_and_destroy_deregisters_everything() {
        let mut f = SliderFoundation::new(RecordingAdapter::new());
        f.init();
        assert_eq!(f.adapter().listener_count(ListenerTarget::Root), 6);
        assert_eq!(f.adapter().listener_count(ListenerTarget::ThumbContainer), 3);
        assert_eq!(f.adapter().listener_count(ListenerTarget::Window), 1);
        f.destroy();
        assert_eq!(f.adapter().total_listeners(), 0);
    }

    #[test]
    fn init_is_idempotent() {
        let mut f = SliderFoundation::new(RecordingAdapter::new());
        f.init();
        f.init();
        assert_eq!(f.adapter().listener_count(ListenerTarget::Root), 6);
    }

    #[test]
    fn discrete_class_defaults_step_to_one() {
        let adapter = RecordingAdapter::new().with_class(css_classes::IS_DISCRETE);
        let mut f = SliderFoundation::new(adapter);
        f.init();
        assert_eq!(f.step(), 1.0);
    }

    #[test]
    fn set_value_clamps_quantizes_and_always_fires_input() {
        let mut f = slider();
        f.set_step(10.0).expect("finite step");
        f.set_value(44.0);
        assert_eq!(f.value(), 40.0);
        f.set_value(400.0);
        assert_eq!(f.value(), 100.0);
        f.set_value(100.0);
        assert_eq!(f.adapter().inputs().len(), 3);
        assert!(f.adapter().changes().is_empty());
        assert_eq!(
            f.adapter().attribute(strings::ARIA_VALUENOW).as_deref(),
            Some("100")
        );
    }

    #[test]
    fn set_value_rejects_nan_without_touching_adapter() {
        let mut f = slider();
        f.set_value(f64::NAN);
        assert_eq!(f.value(), 0.0);
        assert!(f.adapter().calls().is_empty());
    }

    #[test]
    fn set_value_updates_thumb_track_and_pin() {
        let mut f = slider();
        f.set_value(25.0);
        assert_eq!(
            f.adapter().thumb_style(strings::TRANSFORM).as_deref(),
            Some("translateX(25px) translateX(-50%)")
        );
        assert_eq!(
            f.adapter().track_style(strings::TRANSFORM).as_deref(),
            Some("scaleX(0.25)")
        );
        assert_eq!(f.adapter().pin_text(), "25");
    }

    #[test]
    fn rtl_mirrors_thumb_translation() {
        let adapter = RecordingAdapter::new()
            .with_rect(BoundingRect::new(0.0, 0.0, 100.0, 20.0))
            .with_rtl(true);
        let mut f = SliderFoundation::new(adapter);
        f.init();
        f.set_value(25.0);
        assert_eq!(
            f.adapter().thumb_style(strings::TRANSFORM).as_deref(),
            Some("translateX(75px) translateX(-50%)")
        );
    }

    #[test]
    fn min_above_max_is_rejected() {
        let mut f = slider();
        let err = f.set_min(150.0).expect_err("min above max");
        assert_eq!(
            err,
            SliderError::MinAboveMax {
                min: 150.0,
                max: 100.0
            }
        );
        assert_eq!(f.min(), 0.0);
        f.set_max(200.0).expect("raise max first");
        f.set_min(150.0).expect("then raise min");
        assert_eq!((f.min(), f.max()), (150.0, 200.0));
        assert_eq!(f.value(), 150.0);
        assert_eq!(
            f.adapter().attribute(strings::ARIA_VALUEMIN).as_deref(),
            Some("150")
        );
    }

    #[test]
    fn set_range_is_atomic() {
        let mut f = slider();
        f.set_range(150.0, 200.0).expect("valid pair");
        assert_eq!((f.min(), f.max(), f.value()), (150.0, 200.0, 150.0));
        assert!(f.set_range(5.0, 1.0).is_err());
        assert_eq!((f.min(), f.max()), (150.0, 200.0));
    }

    #[test]
    fn range_changes_do_not_notify() {
        let mut f = slider();
        f.set_value(80.0);
        f.adapter_mut().clear_calls();
        f.set_max(50.0).expect("valid max");
        assert_eq!(f.value(), 50.0);
        assert!(f.adapter().inputs().is_empty());
    }

    #[test]
    fn markers_follow_step_and_bounds() {
        let adapter = RecordingAdapter::new().with_class(css_classes::HAS_TRACK_MARKER);
        let mut f = SliderFoundation::new(adapter);
        f.init();
        f.set_step(10.0).expect("finite step");
        assert_eq!(f.adapter().marker_count(), 10);
        f.set_max(50.0).expect("valid max");
        assert_eq!(f.adapter().marker_count(), 5);
        f.set_step(0.0).expect("finite step");
        assert_eq!(f.adapter().marker_count(), 0);
    }

    #[test]
    fn uneven_markers_stretch_the_last_one() {
        let adapter = RecordingAdapter::new().with_class(css_classes::HAS_TRACK_MARKER);
        let mut f = SliderFoundation::new(adapter);
        f.init();
        f.set_range(0.0, 10.0).expect("valid pair");
        f.set_step(4.0).expect("finite step");
        assert_eq!(f.adapter().marker_count(), 2);
        assert_eq!(
            f.adapter().last_marker_style(strings::FLEX_GROW).as_deref(),
            Some("1.5")
        );
    }

    #[test]
    fn markers_require_display_class() {
        let mut f = slider();
        f.set_step(10.0).expect("finite step");
        assert_eq!(f.adapter().marker_count(), 0);
    }

    #[test]
    fn drag_fires_input_per_move_and_one_change() {
        let mut f = slider();
        f.set_range(0.0, 10.0).expect("valid pair");
        f.adapter_mut().clear_calls();

        press_track(&mut f, EventType::MouseDown, 50.0);
        assert!(f.is_dragging());
        assert_eq!(f.value(), 5.0);
        assert_eq!(f.adapter().listener_count(ListenerTarget::Body), 6);

        dispatch(&mut f, ListenerTarget::Body, &pointer(EventType::MouseMove, 70.0));
        dispatch(&mut f, ListenerTarget::Body, &pointer(EventType::MouseMove, 70.0));
        dispatch(&mut f, ListenerTarget::Body, &pointer(EventType::MouseMove, 250.0));
        let inputs: Vec<f64> = f.adapter().inputs().iter().map(|s| s.value).collect();
        assert_eq!(inputs, vec![5.0, 7.0, 10.0]);

        dispatch(&mut f, ListenerTarget::Body, &pointer(EventType::MouseUp, 250.0));
        assert!(!f.is_dragging());
        let changes: Vec<f64> = f.adapter().changes().iter().map(|s| s.value).collect();
        assert_eq!(changes, vec![10.0]);
        assert_eq!(f.adapter().listener_count(ListenerTarget::Body), 0);

        // Change comes after the last input.
        let calls = f.adapter().calls();
        let last_input = calls
            .iter()
            .rposition(|c| matches!(c, AdapterCall::NotifyInput(_)));
        let change = calls
            .iter()
            .position(|c| matches!(c, AdapterCall::NotifyChange(_)));
        assert!(last_input < change);
    }

    #[test]
    fn drag_move_results_request_default_prevention() {
        let mut f = slider();
        press_track(&mut f, EventType::PointerDown, 10.0);
        let results = dispatch(
            &mut f,
            ListenerTarget::Body,
            &pointer(EventType::PointerMove, 20.0),
        );
        assert_eq!(results, vec![EventResult::Consumed]);
    }

    #[test]
    fn press_on_track_sets_in_transit_until_transitionend() {
        let mut f = slider();
        press_track(&mut f, EventType::MouseDown, 30.0);
        assert!(f.adapter().has_class(css_classes::IN_TRANSIT));
        assert!(f.adapter().has_class(css_classes::ACTIVE));
        assert_eq!(f.adapter().listener_count(ListenerTarget::ThumbContainer), 4);

        dispatch(&mut f, ListenerTarget::ThumbContainer, &Event::TransitionEnd);
        assert!(!f.adapter().has_class(css_classes::IN_TRANSIT));
        assert_eq!(f.adapter().listener_count(ListenerTarget::ThumbContainer), 3);
    }

    #[test]
    fn press_on_thumb_is_not_in_transit() {
        let mut f = slider();
        let down = pointer(EventType::MouseDown, 30.0);
        dispatch(&mut f, ListenerTarget::ThumbContainer, &down);
        dispatch(&mut f, ListenerTarget::Root, &down);
        assert!(!f.adapter().has_class(css_classes::IN_TRANSIT));
        assert!(f.is_dragging());
    }

    #[test]
    fn disabling_mid_drag_aborts_without_change() {
        let mut f = slider();
        press_track(&mut f, EventType::MouseDown, 40.0);
        f.set_disabled(true);
        assert!(!f.is_dragging());
        assert_eq!(f.adapter().listener_count(ListenerTarget::Body), 0);
        assert!(!f.adapter().has_class(css_classes::ACTIVE));

        let inputs_before = f.adapter().inputs().len();
        dispatch(&mut f, ListenerTarget::Body, &pointer(EventType::MouseMove, 90.0));
        dispatch(&mut f, ListenerTarget::Body, &pointer(EventType::MouseUp, 90.0));
        assert_eq!(f.adapter().inputs().len(), inputs_before);
        assert!(f.adapter().changes().is_empty());
    }

    #[test]
    fn disabled_refuses_pointer_and_keys_silently() {
        let mut f = slider();
        f.set_disabled(true);
        f.adapter_mut().clear_calls();
        let results = dispatch(&mut f, ListenerTarget::Root, &pointer(EventType::MouseDown, 40.0));
        assert_eq!(results, vec![EventResult::Ignored]);
        assert_eq!(
            f.handle_event(Handler::KeyDown, &key(KeyCode::Right)),
            EventResult::Ignored
        );
        assert_eq!(f.value(), 0.0);
        assert!(f.adapter().calls().is_empty());
    }

    #[test]
    fn disabling_saves_and_restores_tab_index() {
        let adapter = RecordingAdapter::new().with_tab_index(3);
        let mut f = SliderFoundation::new(adapter);
        f.init();
        f.set_disabled(true);
        f.set_disabled(true);
        assert_eq!(
            f.adapter().attribute(strings::ARIA_DISABLED).as_deref(),
            Some("true")
        );
        assert!(f.adapter().has_class(css_classes::DISABLED));
        assert_eq!(f.adapter().attribute(strings::TABINDEX), None);
        f.set_disabled(false);
        assert_eq!(f.adapter().attribute(strings::ARIA_DISABLED), None);
        assert_eq!(
            f.adapter().attribute(strings::TABINDEX).as_deref(),
            Some("3")
        );
        assert!(!f.adapter().has_class(css_classes::DISABLED));
    }

    #[test]
    fn key_step_commits_input_and_change() {
        let mut f = slider();
        f.set_range(0.0, 10.0).expect("valid pair");
        f.set_step(2.0).expect("finite step");
        f.set_value(4.0);
        f.adapter_mut().clear_calls();

        let result = f.handle_event(Handler::KeyDown, &key(KeyCode::Right));
        assert_eq!(result, EventResult::Consumed);
        assert_eq!(f.value(), 6.0);
        assert_eq!(f.adapter().inputs().len(), 1);
        assert_eq!(f.adapter().changes().len(), 1);
        assert!(f.adapter().has_class(css_classes::FOCUS));
    }

    #[test]
    fn key_at_boundary_fires_input_but_no_change() {
        let mut f = slider();
        f.set_value(100.0);
        f.adapter_mut().clear_calls();
        f.handle_event(Handler::KeyDown, &key(KeyCode::End));
        assert_eq!(f.adapter().inputs().len(), 1);
        assert!(f.adapter().changes().is_empty());
    }

    #[test]
    fn continuous_keys_default_to_one() {
        let mut f = slider();
        f.set_value(50.0);
        f.handle_event(Handler::KeyDown, &key(KeyCode::Up));
        assert_eq!(f.value(), 51.0);
        f.handle_event(Handler::KeyDown, &key(KeyCode::PageDown));
        assert_eq!(f.value(), 47.0);
        f.handle_event(Handler::KeyDown, &key(KeyCode::Home));
        assert_eq!(f.value(), 0.0);
    }

    #[test]
    fn unrecognised_and_released_keys_are_ignored() {
        let mut f = slider();
        assert_eq!(
            f.handle_event(Handler::KeyDown, &key(KeyCode::Char('a'))),
            EventResult::Ignored
        );
        let release = Event::Key(KeyEvent::new(KeyCode::Right).with_kind(KeyEventKind::Release));
        assert_eq!(f.handle_event(Handler::KeyDown, &release), EventResult::Ignored);
        assert_eq!(f.value(), 0.0);
    }

    #[test]
    fn focus_class_suppressed_after_pointer_press() {
        let mut f = slider();
        press_track(&mut f, EventType::MouseDown, 10.0);
        dispatch(&mut f, ListenerTarget::Root, &Event::Focus);
        assert!(!f.adapter().has_class(css_classes::FOCUS));
        dispatch(&mut f, ListenerTarget::Root, &Event::Blur);
        dispatch(&mut f, ListenerTarget::Root, &Event::Focus);
        assert!(f.adapter().has_class(css_classes::FOCUS));
    }

    #[test]
    fn resize_relayouts_without_notifying() {
        let mut f = slider();
        f.set_value(50.0);
        f.adapter_mut().clear_calls();
        f.adapter_mut()
            .set_rect(BoundingRect::new(0.0, 0.0, 300.0, 20.0));
        dispatch(&mut f, ListenerTarget::Window, &Event::Resize);
        assert_eq!(f.value(), 50.0);
        assert!(f.adapter().inputs().is_empty());
        assert!(f.adapter().changes().is_empty());
        assert_eq!(
            f.adapter().thumb_style(strings::TRANSFORM).as_deref(),
            Some("translateX(150px) translateX(-50%)")
        );
    }

    #[test]
    fn touch_drag_follows_first_target_touch() {
        let mut f = slider();
        let touch = |event_type, page_x| {
            Event::Pointer(
                PointerEvent::new(event_type, 0.0).with_touches([TouchPoint {
                    identifier: 4,
                    page_x,
                }]),
            )
        };
        dispatch(&mut f, ListenerTarget::Root, &touch(EventType::TouchStart, 20.0));
        dispatch(&mut f, ListenerTarget::Body, &touch(EventType::TouchMove, 60.0));
        assert_eq!(f.value(), 60.0);
        dispatch(
            &mut f,
            ListenerTarget::Body,
            &pointer(EventType::TouchEnd, 0.0),
        );
        assert_eq!(f.adapter().changes().len(), 1);
        assert_eq!(f.value(), 60.0);
    }

    #[test]
    fn destroy_mid_drag_releases_body_listeners() {
        let mut f = slider();
        press_track(&mut f, EventType::MouseDown, 10.0);
        f.destroy();
        assert_eq!(f.adapter().total_listeners(), 0);
        assert!(f.adapter().changes().is_empty());
    }

    #[cfg(feature = "tracing")]
    #[derive(Default)]
    struct SliderTraceState {
        saw_layout_span: bool,
        messages: Vec<String>,
    }

    #[cfg(feature = "tracing")]
    struct SliderTraceCapture {
        state: Arc<Mutex<SliderTraceState>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> Layer<S> for SliderTraceCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::Id,
            _ctx: Context<'_, S>,
        ) {
            if attrs.metadata().name() == "slider.layout" {
                self.state.lock().expect("slider trace lock").saw_layout_span = true;
            }
        }

        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            struct Msg {
                message: Option<String>,
            }
            impl tracing::field::Visit for Msg {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "message" {
                        self.message = Some(value.to_string());
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                    }
                }
            }
            let mut msg = Msg { message: None };
            event.record(&mut msg);
            if let Some(message) = msg.message {
                self.state.lock().expect("slider trace lock").messages.push(message);
            }
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn drag_lifecycle_emits_trace_events() {
        let state = Arc::new(Mutex::new(SliderTraceState::default()));
        let subscriber = tracing_subscriber::registry().with(SliderTraceCapture {
            state: Arc::clone(&state),
        });
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut f = slider();
        f.layout();
        press_track(&mut f, EventType::MouseDown, 30.0);
        dispatch(&mut f, ListenerTarget::Body, &pointer(EventType::MouseUp, 30.0));
        press_track(&mut f, EventType::MouseDown, 60.0);
        f.set_disabled(true);
        f.set_value(f64::NAN);

        let snapshot = state.lock().expect("slider trace lock");
        assert!(snapshot.saw_layout_span, "expected slider.layout span");
        for expected in [
            "slider.drag.start",
            "slider.drag.commit",
            "slider.drag.cancel",
            "slider.value.rejected",
        ] {
            assert!(
                snapshot.messages.iter().any(|m| m == expected),
                "expected {expected} in {:?}",
                snapshot.messages
            );
        }
    }
}
