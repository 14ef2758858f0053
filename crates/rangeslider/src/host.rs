#![forbid(unsafe_code)]

//! [`SliderAdapter`] over an [`ElementTree`].

use rangeslider_core::constants::{css_classes, strings};
use rangeslider_core::event::EventType;
use rangeslider_core::{BoundingRect, Handler, SliderAdapter, SliderError, SliderState};

use crate::tree::{ElementTree, EventTarget, TextDirection};

/// Adapter binding the foundation to the sub-elements of a slider tree.
#[derive(Debug)]
pub struct HostAdapter<T: ElementTree> {
    tree: T,
    root: T::Node,
    thumb_container: T::Node,
    track: T::Node,
    pin_value_marker: T::Node,
    track_marker_container: T::Node,
}

impl<T: ElementTree> HostAdapter<T> {
    /// Locate the required sub-elements.
    ///
    /// # Errors
    ///
    /// [`SliderError::MissingElement`] naming the first selector with no
    /// match.
    pub fn bind(tree: T) -> Result<Self, SliderError> {
        let find = |selector: &'static str| {
            tree.query_selector(selector)
                .ok_or(SliderError::MissingElement { selector })
        };
        let thumb_container = find(strings::THUMB_CONTAINER_SELECTOR)?;
        let track = find(strings::TRACK_SELECTOR)?;
        let pin_value_marker = find(strings::PIN_VALUE_MARKER_SELECTOR)?;
        let track_marker_container = find(strings::TRACK_MARKER_CONTAINER_SELECTOR)?;
        let root = tree.root();
        Ok(Self {
            tree,
            root,
            thumb_container,
            track,
            pin_value_marker,
            track_marker_container,
        })
    }

    #[must_use]
    pub fn tree(&self) -> &T {
        &self.tree
    }

    #[must_use]
    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    #[must_use]
    pub fn into_tree(self) -> T {
        self.tree
    }

    #[must_use]
    pub fn thumb_container(&self) -> T::Node {
        self.thumb_container
    }
}

impl<T: ElementTree> SliderAdapter for HostAdapter<T> {
    fn has_class(&self, class_name: &str) -> bool {
        self.tree.has_class(self.root, class_name)
    }

    fn add_class(&mut self, class_name: &str) {
        self.tree.add_class(self.root, class_name);
    }

    fn remove_class(&mut self, class_name: &str) {
        self.tree.remove_class(self.root, class_name);
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.tree.get_attribute(self.root, name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.tree.set_attribute(self.root, name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.tree.remove_attribute(self.root, name);
    }

    fn compute_bounding_rect(&self) -> BoundingRect {
        self.tree.bounding_client_rect(self.root)
    }

    fn get_tab_index(&self) -> i32 {
        self.tree.tab_index(self.root)
    }

    fn register_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.tree
            .add_event_listener(EventTarget::Node(self.root), Some(event_type), handler);
    }

    fn deregister_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.tree
            .remove_event_listener(EventTarget::Node(self.root), Some(event_type), handler);
    }

    fn register_thumb_container_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: Handler,
    ) {
        self.tree.add_event_listener(
            EventTarget::Node(self.thumb_container),
            Some(event_type),
            handler,
        );
    }

    fn deregister_thumb_container_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: Handler,
    ) {
        self.tree.remove_event_listener(
            EventTarget::Node(self.thumb_container),
            Some(event_type),
            handler,
        );
    }

    fn register_body_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.tree
            .add_event_listener(EventTarget::Body, Some(event_type), handler);
    }

    fn deregister_body_interaction_handler(&mut self, event_type: EventType, handler: Handler) {
        self.tree
            .remove_event_listener(EventTarget::Body, Some(event_type), handler);
    }

    fn register_resize_handler(&mut self, handler: Handler) {
        self.tree.add_event_listener(EventTarget::Window, None, handler);
    }

    fn deregister_resize_handler(&mut self, handler: Handler) {
        self.tree
            .remove_event_listener(EventTarget::Window, None, handler);
    }

    fn notify_input(&mut self, state: &SliderState) {
        self.tree.emit(strings::INPUT_EVENT, state);
    }

    fn notify_change(&mut self, state: &SliderState) {
        self.tree.emit(strings::CHANGE_EVENT, state);
    }

    fn set_thumb_container_style_property(&mut self, property: &str, value: &str) {
        self.tree
            .set_style_property(self.thumb_container, property, value);
    }

    fn set_track_style_property(&mut self, property: &str, value: &str) {
        self.tree.set_style_property(self.track, property, value);
    }

    fn set_marker_value(&mut self, value: &str) {
        self.tree.set_text(self.pin_value_marker, value);
    }

    fn append_track_markers(&mut self, count: usize) {
        self.tree
            .append_elements(self.track_marker_container, css_classes::TRACK_MARKER, count);
    }

    fn remove_track_markers(&mut self) {
        self.tree.remove_children(self.track_marker_container);
    }

    fn set_last_track_markers_style_property(&mut self, property: &str, value: &str) {
        // Markers are recreated wholesale, so the last one is looked up again.
        if let Some(last) = self.tree.query_selector(strings::LAST_TRACK_MARKER_SELECTOR) {
            self.tree.set_style_property(last, property, value);
        }
    }

    fn is_rtl(&self) -> bool {
        self.tree.direction(self.root) == TextDirection::Rtl
    }
}
