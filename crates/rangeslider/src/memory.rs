#![forbid(unsafe_code)]

//! An in-memory [`ElementTree`] for headless hosts and tests.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Removing a subtree
//! returns its slots to a free list that later appends draw from, so a
//! removed id may name a newer element.
//!
//! Only class selectors are understood: `.name` and `.name:last-child`.

use ahash::AHashMap;

use rangeslider_core::constants::strings;
use rangeslider_core::event::EventType;
use rangeslider_core::{BoundingRect, Handler, SliderState};

use crate::tree::{ElementTree, EventTarget, TextDirection};

/// Handle to a [`MemoryTree`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A notification published through [`ElementTree::emit`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedEvent {
    pub name: String,
    pub state: SliderState,
}

#[derive(Debug, Clone, Default)]
struct MemoryNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attributes: AHashMap<String, String>,
    styles: AHashMap<String, String>,
    text: String,
    rect: BoundingRect,
    direction: Option<TextDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Listener {
    target: EventTarget<NodeId>,
    event_type: Option<EventType>,
    handler: Handler,
}

/// Parsed `.class[:last-child]` selector.
#[derive(Debug, Clone, Copy)]
struct ClassSelector<'a> {
    class_name: &'a str,
    last_child: bool,
}

impl<'a> ClassSelector<'a> {
    fn parse(selector: &'a str) -> Option<Self> {
        let body = selector.trim().strip_prefix('.')?;
        let (class_name, last_child) = match body.split_once(':') {
            Some((class_name, "last-child")) => (class_name, true),
            Some(_) => return None,
            None => (body, false),
        };
        if class_name.is_empty() {
            return None;
        }
        Some(Self {
            class_name,
            last_child,
        })
    }
}

/// Arena-backed element tree rooted at the slider element.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: Vec<MemoryNode>,
    free: Vec<NodeId>,
    listeners: Vec<Listener>,
    emitted: Vec<EmittedEvent>,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    const ROOT: NodeId = NodeId(0);

    /// A tree holding only an empty root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![MemoryNode::default()],
            free: Vec::new(),
            listeners: Vec::new(),
            emitted: Vec::new(),
        }
    }

    /// Standard continuous slider markup: a focusable root with a track, a
    /// marker container, and a thumb container holding the pin.
    #[must_use]
    pub fn slider_markup() -> Self {
        let mut tree = Self::new();
        let root = Self::ROOT;
        tree.add_class(root, "slider");
        tree.set_attribute(root, "role", "slider");
        tree.set_attribute(root, strings::TABINDEX, "0");

        let track_container = tree.append_element(root, "slider__track-container");
        tree.append_element(track_container, "slider__track");
        tree.append_element(track_container, "slider__track-marker-container");

        let thumb_container = tree.append_element(root, "slider__thumb-container");
        let pin = tree.append_element(thumb_container, "slider__pin");
        tree.append_element(pin, "slider__pin-value-marker");
        tree.append_element(thumb_container, "slider__thumb");
        tree.append_element(thumb_container, "slider__focus-ring");
        tree
    }

    /// Add a class to the root before attaching.
    #[must_use]
    pub fn with_root_class(mut self, class_name: &str) -> Self {
        self.add_class(Self::ROOT, class_name);
        self
    }

    /// Set a root attribute before attaching.
    #[must_use]
    pub fn with_root_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(Self::ROOT, name, value);
        self
    }

    #[must_use]
    pub fn with_root_rect(mut self, rect: BoundingRect) -> Self {
        self.set_rect(Self::ROOT, rect);
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.set_direction(Self::ROOT, direction);
        self
    }

    /// Append a child element carrying `class_name` and return its id.
    pub fn append_element(&mut self, parent: NodeId, class_name: &str) -> NodeId {
        let node = MemoryNode {
            parent: Some(parent),
            classes: vec![class_name.to_owned()],
            ..MemoryNode::default()
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    /// Number of elements currently attached, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Arena slots allocated so far, live or free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Return `node` and its descendants to the free list.
    fn release_subtree(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            let Some(slot) = self.nodes.get_mut(id.0) else {
                continue;
            };
            pending.append(&mut std::mem::take(&mut slot.children));
            *slot = MemoryNode::default();
            self.listeners.retain(|l| l.target != EventTarget::Node(id));
            self.free.push(id);
        }
    }

    pub fn set_rect(&mut self, node: NodeId, rect: BoundingRect) {
        if let Some(node) = self.nodes.get_mut(node.0) {
            node.rect = rect;
        }
    }

    /// Set an explicit direction; descendants without one inherit it.
    pub fn set_direction(&mut self, node: NodeId, direction: TextDirection) {
        if let Some(node) = self.nodes.get_mut(node.0) {
            node.direction = Some(direction);
        }
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        self.nodes.get(node.0).map_or("", |n| n.text.as_str())
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.nodes
            .get(node.0)
            .map(|n| n.classes.as_slice())
            .unwrap_or_default()
    }

    /// Handlers registered on `target` for `event_type`, in registration order.
    #[must_use]
    pub fn listeners_for(
        &self,
        target: EventTarget<NodeId>,
        event_type: Option<EventType>,
    ) -> Vec<Handler> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.event_type == event_type)
            .map(|l| l.handler)
            .collect()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Every published notification, oldest first.
    #[must_use]
    pub fn emitted(&self) -> &[EmittedEvent] {
        &self.emitted
    }

    /// States of the notifications published under `name`.
    #[must_use]
    pub fn emitted_named(&self, name: &str) -> Vec<SliderState> {
        self.emitted
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.state)
            .collect()
    }

    pub fn clear_emitted(&mut self) {
        self.emitted.clear();
    }

    /// Targets an event dispatched at `target` visits while bubbling.
    ///
    /// Element events bubble through every ancestor and then reach the body.
    #[must_use]
    pub fn propagation_path(&self, target: EventTarget<NodeId>) -> Vec<EventTarget<NodeId>> {
        match target {
            EventTarget::Node(node) => {
                let mut path = Vec::new();
                let mut current = Some(node);
                while let Some(id) = current {
                    path.push(EventTarget::Node(id));
                    current = self.nodes.get(id.0).and_then(|n| n.parent);
                }
                path.push(EventTarget::Body);
                path
            }
            other => vec![other],
        }
    }

    fn find_descendant(&self, from: NodeId, selector: ClassSelector<'_>) -> Option<NodeId> {
        let node = self.nodes.get(from.0)?;
        let count = node.children.len();
        for (index, &child) in node.children.iter().enumerate() {
            let matches = self
                .nodes
                .get(child.0)
                .is_some_and(|c| c.classes.iter().any(|class| class == selector.class_name))
                && (!selector.last_child || index + 1 == count);
            if matches {
                return Some(child);
            }
            if let Some(found) = self.find_descendant(child, selector) {
                return Some(found);
            }
        }
        None
    }
}

impl ElementTree for MemoryTree {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        Self::ROOT
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let selector = ClassSelector::parse(selector)?;
        self.find_descendant(Self::ROOT, selector)
    }

    fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| n.classes.iter().any(|c| c == class_name))
    }

    fn add_class(&mut self, node: NodeId, class_name: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            if !n.classes.iter().any(|c| c == class_name) {
                n.classes.push(class_name.to_owned());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class_name: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.classes.retain(|c| c != class_name);
        }
    }

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.attributes.get(name))
            .cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.remove(name);
        }
    }

    fn bounding_client_rect(&self, node: NodeId) -> BoundingRect {
        self.nodes.get(node.0).map(|n| n.rect).unwrap_or_default()
    }

    fn tab_index(&self, node: NodeId) -> i32 {
        self.get_attribute(node, strings::TABINDEX)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(-1)
    }

    fn direction(&self, node: NodeId) -> TextDirection {
        let mut current = Some(node);
        while let Some(id) = current {
            let Some(n) = self.nodes.get(id.0) else {
                break;
            };
            if let Some(direction) = n.direction {
                return direction;
            }
            current = n.parent;
        }
        TextDirection::Ltr
    }

    fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            text.clone_into(&mut n.text);
        }
    }

    fn append_elements(&mut self, parent: NodeId, class_name: &str, count: usize) {
        for _ in 0..count {
            self.append_element(parent, class_name);
        }
    }

    fn remove_children(&mut self, parent: NodeId) {
        let Some(node) = self.nodes.get_mut(parent.0) else {
            return;
        };
        for child in std::mem::take(&mut node.children) {
            self.release_subtree(child);
        }
    }

    fn add_event_listener(
        &mut self,
        target: EventTarget<NodeId>,
        event_type: Option<EventType>,
        handler: Handler,
    ) {
        let listener = Listener {
            target,
            event_type,
            handler,
        };
        // Same triple registered twice is a single listener.
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
    }

    fn remove_event_listener(
        &mut self,
        target: EventTarget<NodeId>,
        event_type: Option<EventType>,
        handler: Handler,
    ) {
        let listener = Listener {
            target,
            event_type,
            handler,
        };
        self.listeners.retain(|l| *l != listener);
    }

    fn emit(&mut self, event_name: &str, state: &SliderState) {
        self.emitted.push(EmittedEvent {
            name: event_name.to_owned(),
            state: *state,
        });
    }
}
