#![forbid(unsafe_code)]

//! In-memory adapter that records every call.
//!
//! [`RecordingAdapter`] keeps just enough presentation state (classes,
//! attributes, styles, listeners, marker count) for assertions, and logs each
//! adapter call in order so tests can check notification ordering.

use std::collections::HashMap;

use crate::adapter::{Handler, ListenerTarget, SliderAdapter};
use crate::event::{Event, EventType};
use crate::foundation::{EventResult, SliderFoundation};
use crate::geometry::BoundingRect;
use crate::state::SliderState;

/// One recorded adapter call. Read-only queries are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    AddClass(String),
    RemoveClass(String),
    SetAttribute(String, String),
    RemoveAttribute(String),
    Register(ListenerTarget, Option<EventType>, Handler),
    Deregister(ListenerTarget, Option<EventType>, Handler),
    NotifyInput(SliderState),
    NotifyChange(SliderState),
    SetThumbStyle(String, String),
    SetTrackStyle(String, String),
    SetMarkerValue(String),
    AppendTrackMarkers(usize),
    RemoveTrackMarkers,
    SetLastTrackMarkerStyle(String, String),
}

/// A registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub target: ListenerTarget,
    pub event_type: Option<EventType>,
    pub handler: Handler,
}

/// Adapter that records calls and mirrors presentation state in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    rect: BoundingRect,
    tab_index: i32,
    rtl: bool,
    listeners: Vec<Listener>,
    thumb_styles: HashMap<String, String>,
    track_styles: HashMap<String, String>,
    last_marker_styles: HashMap<String, String>,
    pin_text: String,
    marker_count: usize,
    calls: Vec<AdapterCall>,
}

impl RecordingAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rect(mut self, rect: BoundingRect) -> Self {
        self.rect = rect;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class_name: &str) -> Self {
        self.classes.push(class_name.to_owned());
        self
    }

    #[must_use]
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    #[must_use]
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    /// Change the rectangle reported by subsequent layout passes.
    pub fn set_rect(&mut self, rect: BoundingRect) {
        self.rect = rect;
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    /// Every recorded call, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[AdapterCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// States carried by recorded `input` notifications.
    #[must_use]
    pub fn inputs(&self) -> Vec<SliderState> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                AdapterCall::NotifyInput(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// States carried by recorded `change` notifications.
    #[must_use]
    pub fn changes(&self) -> Vec<SliderState> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                AdapterCall::NotifyChange(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    #[must_use]
    pub fn thumb_style(&self, property: &str) -> Option<String> {
        self.thumb_styles.get(property).cloned()
    }

    #[must_use]
    pub fn track_style(&self, property: &str) -> Option<String> {
        self.track_styles.get(property).cloned()
    }

    /// Style of the current last marker; reset whenever markers are removed.
    #[must_use]
    pub fn last_marker_style(&self, property: &str) -> Option<String> {
        self.last_marker_styles.get(property).cloned()
    }

    #[must_use]
    pub fn pin_text(&self) -> &str {
        &self.pin_text
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    #[must_use]
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    #[must_use]
    pub fn listener_count(&self, target: ListenerTarget) -> usize {
        self.listeners.iter().filter(|l| l.target == target).count()
    }

    #[must_use]
    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Handlers registered on `target` for `event_type`, in registration order.
    #[must_use]
    pub fn handlers_for(&self, target: ListenerTarget, event_type: Option<EventType>) -> Vec<Handler> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.event_type == event_type)
            .map(|l| l.handler)
            .collect()
    }

    fn register(&mut self, target: ListenerTarget, event_type: Option<EventType>, handler: Handler) {
        self.listeners.push(Listener {
            target,
            event_type,
            handler,
        });
        self.calls
            .push(AdapterCall::Register(target, event_type, handler));
    }

    fn deregister(
        &mut self,
        target: ListenerTarget,
        event_type: Option<EventType>,
        handler: Handler,
    ) {
        let wanted = Listener {
            target,
            event_type,
            handler,
        };
        if let Some(index) = self.listeners.iter().position(|l| *l == wanted) {
            self.listeners.remove(index);
        }
        self.calls
            .push(AdapterCall::Deregister(target, event_type, handler));
    }
}

impl SliderAdapter for RecordingAdapter {
    fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    fn add_class(&mut self, class_name: &str) {
        if !self.has_class(class_name) {
            self.classes.push(class_name.to_owned());
        }
        self.calls.push(AdapterCall::AddClass(class_name.to_owned()));
    }

    fn remove_class(&mut self, class_name: &str) {
        self.classes.retain(|c| c != class_name);
        self.calls
            .push(AdapterCall::RemoveClass(class_name.to_owned()));
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self.calls
            .push(AdapterCall::SetAttribute(name.to_owned(), value.to_owned()));
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
        self.calls
            .push(AdapterCall::RemoveAttribute(name.to_owned()));
    }

    fn compute_bounding_rect(&self) -> BoundingRect {
        self.rect
    }

    fn get_tab_index(&self) -> i32 {
        self.tab_index
    }

    fn register_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.register(ListenerTarget::Root, Some(event_type), handler);
    }

    fn deregister_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.deregister(ListenerTarget::Root, Some(event_type), handler);
    }

    fn register_thumb_container_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: Handler,
    ) {
        self.register(ListenerTarget::ThumbContainer, Some(event_type), handler);
    }

    fn deregister_thumb_container_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: Handler,
    ) {
        self.deregister(ListenerTarget::ThumbContainer, Some(event_type), handler);
    }

    fn register_body_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.register(ListenerTarget::Body, Some(event_type), handler);
    }

    fn deregister_body_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.deregister(ListenerTarget::Body, Some(event_type), handler);
    }

    fn register_resize_handler(&mut self, handler: Handler) {
        self.register(ListenerTarget::Window, None, handler);
    }

    fn deregister_resize_handler(&mut self, handler: Handler) {
        self.deregister(ListenerTarget::Window, None, handler);
    }

    fn notify_input(&mut self, state: &SliderState) {
        self.calls.push(AdapterCall::NotifyInput(*state));
    }

    fn notify_change(&mut self, state: &SliderState) {
        self.calls.push(AdapterCall::NotifyChange(*state));
    }

    fn set_thumb_container_style_property(&mut self, property: &str, value: &str) {
        self.thumb_styles
            .insert(property.to_owned(), value.to_owned());
        self.calls.push(AdapterCall::SetThumbStyle(
            property.to_owned(),
            value.to_owned(),
        ));
    }

    fn set_track_style_property(&mut self, property: &str, value: &str) {
        self.track_styles
            .insert(property.to_owned(), value.to_owned());
        self.calls.push(AdapterCall::SetTrackStyle(
            property.to_owned(),
            value.to_owned(),
        ));
    }

    fn set_marker_value(&mut self, value: &str) {
        value.clone_into(&mut self.pin_text);
        self.calls
            .push(AdapterCall::SetMarkerValue(value.to_owned()));
    }

    fn append_track_markers(&mut self, count: usize) {
        self.marker_count += count;
        self.calls.push(AdapterCall::AppendTrackMarkers(count));
    }

    fn remove_track_markers(&mut self) {
        self.marker_count = 0;
        self.last_marker_styles.clear();
        self.calls.push(AdapterCall::RemoveTrackMarkers);
    }

    fn set_last_track_markers_style_property(&mut self, property: &str, value: &str) {
        if self.marker_count > 0 {
            self.last_marker_styles
                .insert(property.to_owned(), value.to_owned());
        }
        self.calls.push(AdapterCall::SetLastTrackMarkerStyle(
            property.to_owned(),
            value.to_owned(),
        ));
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }
}

/// Deliver `event` to every handler registered on `target` for its event
/// type, the way a host's event loop would.
pub fn dispatch(
    foundation: &mut SliderFoundation<RecordingAdapter>,
    target: ListenerTarget,
    event: &Event,
) -> Vec<EventResult> {
    let handlers = foundation
        .adapter()
        .handlers_for(target, event.event_type());
    handlers
        .into_iter()
        .map(|handler| foundation.handle_event(handler, event))
        .collect()
}
