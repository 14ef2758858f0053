#![forbid(unsafe_code)]

//! The capability set the foundation depends on.
//!
//! The foundation never sees a concrete rendering surface. It reads and
//! mutates presentation state and (de)registers listeners through
//! [`SliderAdapter`], and hosts feed platform events back through
//! [`SliderFoundation::handle_event`](crate::foundation::SliderFoundation::handle_event)
//! tagged with the [`Handler`] token they were registered under.
//!
//! # Contract
//!
//! - Every mutation must be safe to repeat with the same arguments.
//! - Registrations are paired 1:1 with deregistrations by the foundation; a
//!   host may treat `(target, event type, handler)` as a multiset key.

use crate::event::EventType;
use crate::geometry::BoundingRect;
use crate::state::SliderState;

/// Token identifying which foundation entry point a listener belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Down events on the root.
    InteractionStart,
    /// Down events on the thumb container (seen before the root's).
    ThumbContainerPointer,
    /// `keydown` on the root.
    KeyDown,
    /// `focus` on the root.
    Focus,
    /// `blur` on the root.
    Blur,
    /// Body-level move events during a drag session.
    BodyMove,
    /// Body-level up/cancel events during a drag session.
    BodyUp,
    /// Window resize.
    Resize,
    /// `transitionend` on the thumb container.
    TransitionEnd,
}

/// Where a listener lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Root,
    ThumbContainer,
    Body,
    Window,
}

/// Capabilities the foundation requires from its host.
pub trait SliderAdapter {
    /// Whether the root carries `class_name`.
    fn has_class(&self, class_name: &str) -> bool;

    /// Add `class_name` to the root.
    fn add_class(&mut self, class_name: &str);

    /// Remove `class_name` from the root.
    fn remove_class(&mut self, class_name: &str);

    /// Read an attribute of the root.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute on the root.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove an attribute from the root.
    fn remove_attribute(&mut self, name: &str);

    /// Current bounding rectangle of the root.
    fn compute_bounding_rect(&self) -> BoundingRect;

    /// Current tab index of the root.
    fn get_tab_index(&self) -> i32;

    fn register_interaction_handler(&mut self, event_type: EventType, handler: Handler);

    fn deregister_interaction_handler(&mut self, event_type: EventType, handler: Handler);

    fn register_thumb_container_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: Handler,
    );

    fn deregister_thumb_container_interaction_handler(
        &mut self,
        event_type: EventType,
        handler: Handler,
    );

    fn register_body_interaction_handler(&mut self, event_type: EventType, handler: Handler);

    fn deregister_body_interaction_handler(&mut self, event_type: EventType, handler: Handler);

    fn register_resize_handler(&mut self, handler: Handler);

    fn deregister_resize_handler(&mut self, handler: Handler);

    /// Fire the `input` notification.
    fn notify_input(&mut self, state: &SliderState);

    /// Fire the `change` notification.
    fn notify_change(&mut self, state: &SliderState);

    fn set_thumb_container_style_property(&mut self, property: &str, value: &str);

    fn set_track_style_property(&mut self, property: &str, value: &str);

    /// Set the text shown in the value pin.
    fn set_marker_value(&mut self, value: &str);

    /// Append `count` marker placeholders to the marker container.
    fn append_track_markers(&mut self, count: usize);

    /// Remove every marker placeholder.
    fn remove_track_markers(&mut self);

    /// Style the current last marker. Implementations must locate it afresh
    /// on every call; markers are destroyed and recreated wholesale.
    fn set_last_track_markers_style_property(&mut self, property: &str, value: &str);

    /// Whether the root lays out right-to-left.
    fn is_rtl(&self) -> bool;
}
