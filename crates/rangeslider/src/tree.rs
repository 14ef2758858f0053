#![forbid(unsafe_code)]

//! The markup surface a slider component binds to.
//!
//! [`ElementTree`] is the minimum a host document must offer: selector
//! lookup under the slider root, class/attribute/style mutation, geometry,
//! listener bookkeeping, and a way to publish notifications. Browser, native,
//! and in-memory hosts all implement it the same way.

use rangeslider_core::event::EventType;
use rangeslider_core::{BoundingRect, Handler, SliderState};

/// Where a host listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget<N> {
    /// An element of the tree.
    Node(N),
    /// The document body.
    Body,
    /// The window (resize).
    Window,
}

/// Computed text direction of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// A document tree rooted at the slider element.
pub trait ElementTree {
    /// Handle to an element.
    type Node: Copy + Eq + std::fmt::Debug;

    /// The slider root element.
    fn root(&self) -> Self::Node;

    /// First descendant of the root matching `selector`, in document order.
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;

    fn has_class(&self, node: Self::Node, class_name: &str) -> bool;

    fn add_class(&mut self, node: Self::Node, class_name: &str);

    fn remove_class(&mut self, node: Self::Node, class_name: &str);

    fn get_attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.get_attribute(node, name).is_some()
    }

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: Self::Node, name: &str);

    fn bounding_client_rect(&self, node: Self::Node) -> BoundingRect;

    /// Effective tab index (`-1` when not focusable by tabbing).
    fn tab_index(&self, node: Self::Node) -> i32;

    fn direction(&self, node: Self::Node) -> TextDirection;

    fn set_style_property(&mut self, node: Self::Node, property: &str, value: &str);

    /// Replace the text content of `node`.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Append `count` empty elements carrying `class_name` to `parent`.
    fn append_elements(&mut self, parent: Self::Node, class_name: &str, count: usize);

    /// Remove every child of `parent`.
    fn remove_children(&mut self, parent: Self::Node);

    fn add_event_listener(
        &mut self,
        target: EventTarget<Self::Node>,
        event_type: Option<EventType>,
        handler: Handler,
    );

    fn remove_event_listener(
        &mut self,
        target: EventTarget<Self::Node>,
        event_type: Option<EventType>,
        handler: Handler,
    );

    /// Publish a slider notification to the host's observers.
    fn emit(&mut self, event_name: &str, state: &SliderState);
}
