#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rangeslider_core::event::{KeyCode, KeyEvent, PointerEvent, TouchPoint};
use rangeslider_core::testing::{RecordingAdapter, dispatch};
use rangeslider_core::{BoundingRect, Event, EventType, ListenerTarget, SliderFoundation};

#[derive(Debug, Arbitrary)]
enum Op {
    SetValue(f64),
    SetMin(i16),
    SetMax(i16),
    SetRange(i16, i16),
    /// Step in quarter units.
    SetStep(u8),
    Pointer {
        target: Target,
        kind: u8,
        x: i16,
        pointer_id: Option<u8>,
        touch: Option<(u8, i16)>,
        lifted: Option<u8>,
    },
    Key(u8),
    Disable(bool),
    Resize(u16),
    Rtl(bool),
    Focus,
    Blur,
    TransitionEnd,
}

#[derive(Debug, Arbitrary)]
enum Target {
    Root,
    ThumbContainer,
    Body,
}

const EVENT_TYPES: [EventType; 11] = [
    EventType::MouseDown,
    EventType::PointerDown,
    EventType::TouchStart,
    EventType::MouseMove,
    EventType::PointerMove,
    EventType::TouchMove,
    EventType::MouseUp,
    EventType::PointerUp,
    EventType::TouchEnd,
    EventType::PointerCancel,
    EventType::TouchCancel,
];

const KEYS: [KeyCode; 9] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Home,
    KeyCode::End,
    KeyCode::PageUp,
    KeyCode::PageDown,
    KeyCode::Other,
];

fuzz_target!(|ops: Vec<Op>| {
    let adapter = RecordingAdapter::new()
        .with_rect(BoundingRect::new(10.0, 0.0, 240.0, 20.0))
        .with_tab_index(0);
    let mut slider = SliderFoundation::new(adapter);
    slider.init();

    for op in ops.into_iter().take(256) {
        match op {
            Op::SetValue(v) => slider.set_value(v),
            Op::SetMin(min) => {
                let _ = slider.set_min(f64::from(min));
            }
            Op::SetMax(max) => {
                let _ = slider.set_max(f64::from(max));
            }
            Op::SetRange(min, max) => {
                let _ = slider.set_range(f64::from(min), f64::from(max));
            }
            Op::SetStep(quarters) => {
                let _ = slider.set_step(f64::from(quarters) / 4.0);
            }
            Op::Pointer {
                target,
                kind,
                x,
                pointer_id,
                touch,
                lifted,
            } => {
                let event_type = EVENT_TYPES[usize::from(kind) % EVENT_TYPES.len()];
                let mut event = PointerEvent::new(event_type, f64::from(x));
                if let Some(id) = pointer_id {
                    event = event.with_pointer_id(u32::from(id));
                }
                if let Some((identifier, page_x)) = touch {
                    event = event.with_touches([TouchPoint {
                        identifier: u32::from(identifier),
                        page_x: f64::from(page_x),
                    }]);
                }
                if let Some(identifier) = lifted {
                    event = event.with_changed_touches([TouchPoint {
                        identifier: u32::from(identifier),
                        page_x: f64::from(x),
                    }]);
                }
                let event = Event::Pointer(event);
                match target {
                    Target::Root => {
                        dispatch(&mut slider, ListenerTarget::Root, &event);
                    }
                    Target::ThumbContainer => {
                        dispatch(&mut slider, ListenerTarget::ThumbContainer, &event);
                        dispatch(&mut slider, ListenerTarget::Root, &event);
                    }
                    Target::Body => {
                        dispatch(&mut slider, ListenerTarget::Body, &event);
                    }
                }
            }
            Op::Key(index) => {
                let code = KEYS[usize::from(index) % KEYS.len()];
                dispatch(&mut slider, ListenerTarget::Root, &Event::Key(KeyEvent::new(code)));
            }
            Op::Disable(disabled) => slider.set_disabled(disabled),
            Op::Resize(width) => {
                slider
                    .adapter_mut()
                    .set_rect(BoundingRect::new(10.0, 0.0, f64::from(width), 20.0));
                dispatch(&mut slider, ListenerTarget::Window, &Event::Resize);
            }
            Op::Rtl(rtl) => slider.adapter_mut().set_rtl(rtl),
            Op::Focus => {
                dispatch(&mut slider, ListenerTarget::Root, &Event::Focus);
            }
            Op::Blur => {
                dispatch(&mut slider, ListenerTarget::Root, &Event::Blur);
            }
            Op::TransitionEnd => {
                dispatch(&mut slider, ListenerTarget::ThumbContainer, &Event::TransitionEnd);
            }
        }

        // Post-conditions that must always hold:
        let (min, max, value) = (slider.min(), slider.max(), slider.value());
        assert!(min <= max, "bounds inverted: {min} > {max}");
        assert!(value >= min && value <= max, "{value} outside [{min}, {max}]");
        assert!(value.is_finite(), "non-finite value");

        let body = slider.adapter().listener_count(ListenerTarget::Body);
        if slider.is_dragging() {
            assert_eq!(body, 1 + EventType::UP.len(), "body listeners during drag");
        } else {
            assert_eq!(body, 0, "body listeners leaked");
        }
        assert!(
            slider.adapter().listener_count(ListenerTarget::ThumbContainer)
                <= EventType::DOWN.len() + 1,
            "thumb container listeners leaked"
        );
    }

    slider.destroy();
    assert_eq!(slider.adapter().total_listeners(), 0, "listeners survive destroy");
});
