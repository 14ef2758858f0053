#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Hosts translate platform events into these types before handing them to
//! [`SliderFoundation::handle_event`](crate::foundation::SliderFoundation::handle_event).
//!
//! # Design Notes
//!
//! - Pointer coordinates are page coordinates in CSS pixels (`f64`).
//! - Touch events carry their target touches; the first one supplies the
//!   x coordinate and the pointer identifier.
//! - `KeyEventKind` defaults to `Press`.

/// Platform event names the foundation registers listeners for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    MouseDown,
    PointerDown,
    TouchStart,
    MouseMove,
    PointerMove,
    TouchMove,
    MouseUp,
    PointerUp,
    TouchEnd,
    /// Pointer capture lost.
    PointerCancel,
    /// Touch sequence interrupted by the platform.
    TouchCancel,
    KeyDown,
    Focus,
    Blur,
    TransitionEnd,
}

impl EventType {
    /// Events that may start a drag session.
    pub const DOWN: [EventType; 3] = [Self::MouseDown, Self::PointerDown, Self::TouchStart];

    /// Events that end a drag session.
    pub const UP: [EventType; 5] = [
        Self::MouseUp,
        Self::PointerUp,
        Self::TouchEnd,
        Self::PointerCancel,
        Self::TouchCancel,
    ];

    /// DOM name of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::PointerDown => "pointerdown",
            Self::TouchStart => "touchstart",
            Self::MouseMove => "mousemove",
            Self::PointerMove => "pointermove",
            Self::TouchMove => "touchmove",
            Self::MouseUp => "mouseup",
            Self::PointerUp => "pointerup",
            Self::TouchEnd => "touchend",
            Self::PointerCancel => "pointercancel",
            Self::TouchCancel => "touchcancel",
            Self::KeyDown => "keydown",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::TransitionEnd => "transitionend",
        }
    }

    /// The move event belonging to the same family as a down event.
    ///
    /// Returns `None` for anything that is not a down event.
    #[must_use]
    pub const fn move_for(self) -> Option<EventType> {
        match self {
            Self::MouseDown => Some(Self::MouseMove),
            Self::PointerDown => Some(Self::PointerMove),
            Self::TouchStart => Some(Self::TouchMove),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_down(self) -> bool {
        matches!(self, Self::MouseDown | Self::PointerDown | Self::TouchStart)
    }

    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(
            self,
            Self::MouseUp
                | Self::PointerUp
                | Self::TouchEnd
                | Self::PointerCancel
                | Self::TouchCancel
        )
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical input event delivered to the foundation.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse, pointer, or touch event.
    Pointer(PointerEvent),

    /// Keyboard event.
    Key(KeyEvent),

    /// The slider root gained focus.
    Focus,

    /// The slider root lost focus.
    Blur,

    /// The window was resized.
    Resize,

    /// The thumb container finished a CSS transition.
    TransitionEnd,
}

impl Event {
    /// The event type a listener must be registered for to receive this event.
    ///
    /// Resize notifications are not keyed by an event type and return `None`.
    #[must_use]
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            Self::Pointer(pointer) => Some(pointer.event_type),
            Self::Key(_) => Some(EventType::KeyDown),
            Self::Focus => Some(EventType::Focus),
            Self::Blur => Some(EventType::Blur),
            Self::TransitionEnd => Some(EventType::TransitionEnd),
            Self::Resize => None,
        }
    }
}

/// A single touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier.
    pub identifier: u32,
    /// Page x coordinate.
    pub page_x: f64,
}

/// A mouse, pointer, or touch event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Which platform event this is.
    pub event_type: EventType,

    /// Page x coordinate reported on the event itself.
    pub page_x: f64,

    /// Pointer identifier for pointer events.
    pub pointer_id: Option<u32>,

    /// Touches still targeting the element (touch events only).
    pub target_touches: Vec<TouchPoint>,

    /// Touches that changed in this event. On `touchend` these are the
    /// fingers that lifted, which are absent from `target_touches`.
    pub changed_touches: Vec<TouchPoint>,
}

impl PointerEvent {
    /// Create a pointer event at the given page x coordinate.
    #[must_use]
    pub fn new(event_type: EventType, page_x: f64) -> Self {
        Self {
            event_type,
            page_x,
            pointer_id: None,
            target_touches: Vec::new(),
            changed_touches: Vec::new(),
        }
    }

    /// Attach a pointer identifier.
    #[must_use]
    pub fn with_pointer_id(mut self, pointer_id: u32) -> Self {
        self.pointer_id = Some(pointer_id);
        self
    }

    /// Attach the touches targeting the element.
    #[must_use]
    pub fn with_touches(mut self, touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        self.target_touches = touches.into_iter().collect();
        self
    }

    /// Attach the touches that changed in this event.
    #[must_use]
    pub fn with_changed_touches(mut self, touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        self.changed_touches = touches.into_iter().collect();
        self
    }

    /// The x coordinate the slider should track: the first target touch if
    /// present, otherwise the event's own page x.
    #[must_use]
    pub fn resolved_page_x(&self) -> f64 {
        self.target_touches
            .first()
            .map_or(self.page_x, |touch| touch.page_x)
    }

    /// The identifier of the pointer driving this event, if known.
    #[must_use]
    pub fn resolved_pointer_id(&self) -> Option<u32> {
        self.target_touches
            .first()
            .map(|touch| touch.identifier)
            .or(self.pointer_id)
    }

    /// Whether this up event ends the pointer identified by `owner`.
    ///
    /// Lifted touches are read from `changed_touches`; `target_touches` only
    /// lists fingers still down and is never consulted. Without any
    /// identifier on the event the release is attributed to the owner.
    #[must_use]
    pub fn ends_pointer(&self, owner: u32) -> bool {
        if !self.changed_touches.is_empty() {
            return self
                .changed_touches
                .iter()
                .any(|touch| touch.identifier == owner);
        }
        self.pointer_id.is_none_or(|id| id == owner)
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Press, repeat, or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Keys the slider distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Any other printable key.
    Char(char),
    /// Any key the slider has no use for.
    Other,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` name, falling back to the legacy
    /// numeric `keyCode` when the name is unknown.
    #[must_use]
    pub fn from_dom(key: &str, key_code: u32) -> Self {
        match key {
            "ArrowLeft" => return Self::Left,
            "ArrowRight" => return Self::Right,
            "ArrowUp" => return Self::Up,
            "ArrowDown" => return Self::Down,
            "Home" => return Self::Home,
            "End" => return Self::End,
            "PageUp" => return Self::PageUp,
            "PageDown" => return Self::PageDown,
            _ => {}
        }
        match key_code {
            37 => Self::Left,
            39 => Self::Right,
            38 => Self::Up,
            40 => Self::Down,
            36 => Self::Home,
            35 => Self::End,
            33 => Self::PageUp,
            34 => Self::PageDown,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Char(ch),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held.
    Repeat,

    /// Key was released.
    Release,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_event_matches_down_family() {
        assert_eq!(EventType::MouseDown.move_for(), Some(EventType::MouseMove));
        assert_eq!(
            EventType::PointerDown.move_for(),
            Some(EventType::PointerMove)
        );
        assert_eq!(EventType::TouchStart.move_for(), Some(EventType::TouchMove));
        assert_eq!(EventType::MouseUp.move_for(), None);
    }

    #[test]
    fn down_and_up_sets_are_disjoint() {
        for down in EventType::DOWN {
            assert!(down.is_down());
            assert!(!down.is_up());
        }
        for up in EventType::UP {
            assert!(up.is_up());
            assert!(!up.is_down());
        }
    }

    #[test]
    fn dom_names() {
        assert_eq!(EventType::TouchStart.as_str(), "touchstart");
        assert_eq!(EventType::TransitionEnd.to_string(), "transitionend");
    }

    #[test]
    fn touch_overrides_page_x_and_id() {
        let event = PointerEvent::new(EventType::TouchStart, 10.0).with_touches([
            TouchPoint {
                identifier: 7,
                page_x: 42.0,
            },
            TouchPoint {
                identifier: 8,
                page_x: 90.0,
            },
        ]);
        assert_eq!(event.resolved_page_x(), 42.0);
        assert_eq!(event.resolved_pointer_id(), Some(7));
    }

    #[test]
    fn pointer_without_touches_uses_own_fields() {
        let event = PointerEvent::new(EventType::PointerMove, 12.5).with_pointer_id(3);
        assert_eq!(event.resolved_page_x(), 12.5);
        assert_eq!(event.resolved_pointer_id(), Some(3));
    }

    #[test]
    fn lift_is_read_from_changed_touches() {
        let finger = |identifier, page_x| TouchPoint { identifier, page_x };
        let lift = PointerEvent::new(EventType::TouchEnd, 0.0)
            .with_touches([finger(2, 60.0)])
            .with_changed_touches([finger(1, 20.0)]);
        assert!(lift.ends_pointer(1));
        assert!(!lift.ends_pointer(2));

        let bare = PointerEvent::new(EventType::TouchEnd, 0.0).with_touches([finger(2, 60.0)]);
        assert!(bare.ends_pointer(1));

        let pointer = PointerEvent::new(EventType::PointerUp, 0.0).with_pointer_id(4);
        assert!(pointer.ends_pointer(4));
        assert!(!pointer.ends_pointer(5));
    }

    #[test]
    fn key_names_and_legacy_codes() {
        assert_eq!(KeyCode::from_dom("ArrowLeft", 0), KeyCode::Left);
        assert_eq!(KeyCode::from_dom("Unidentified", 39), KeyCode::Right);
        assert_eq!(KeyCode::from_dom("", 33), KeyCode::PageUp);
        assert_eq!(KeyCode::from_dom("a", 65), KeyCode::Char('a'));
        assert_eq!(KeyCode::from_dom("Shift", 16), KeyCode::Other);
    }

    #[test]
    fn event_type_routing() {
        let key = Event::Key(KeyEvent::new(KeyCode::Up));
        assert_eq!(key.event_type(), Some(EventType::KeyDown));
        assert_eq!(Event::Resize.event_type(), None);
        let down = Event::Pointer(PointerEvent::new(EventType::MouseDown, 0.0));
        assert_eq!(down.event_type(), Some(EventType::MouseDown));
    }

    #[test]
    fn key_event_kind_default() {
        assert_eq!(KeyEventKind::default(), KeyEventKind::Press);
        let release = KeyEvent::new(KeyCode::Home).with_kind(KeyEventKind::Release);
        assert_eq!(release.kind, KeyEventKind::Release);
    }
}
