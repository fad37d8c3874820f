//! Browser events to [`RawInput`].

use glide_input::{RawInput, TouchPoint};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, PointerEvent, TouchEvent, TouchList, Window};

/// Events the track listens for.
pub const TRACK_EVENTS: &[&str] = &[
    "mousedown",
    "touchstart",
    "pointerdown",
    "mouseup",
    "touchend",
    "touchcancel",
    "pointerup",
    "pointercancel",
];

/// Events the wrapper listens for.
pub const WRAPPER_EVENTS: &[&str] = &["mousemove", "touchmove", "pointermove"];

/// Convert a DOM event into raw input. Unknown or malformed events map to
/// `None`.
pub fn raw_input(event: &Event) -> Option<RawInput> {
    let kind = event.type_();
    match kind.as_str() {
        "pointerdown" | "pointermove" | "pointerup" | "pointercancel" => {
            let pointer = event.dyn_ref::<PointerEvent>()?;
            let id = pointer.pointer_id();
            let x = f64::from(pointer.client_x());
            Some(match kind.as_str() {
                "pointerdown" => RawInput::PointerDown { id, x },
                "pointermove" => RawInput::PointerMove { id, x },
                "pointerup" => RawInput::PointerUp { id, x },
                _ => RawInput::PointerCancel { id },
            })
        }
        "mousedown" | "mousemove" | "mouseup" => {
            let x = f64::from(event.dyn_ref::<MouseEvent>()?.client_x());
            Some(match kind.as_str() {
                "mousedown" => RawInput::MouseDown { x },
                "mousemove" => RawInput::MouseMove { x },
                _ => RawInput::MouseUp { x },
            })
        }
        "touchstart" | "touchmove" | "touchend" => {
            let touches = touch_points(&event.dyn_ref::<TouchEvent>()?.changed_touches());
            Some(match kind.as_str() {
                "touchstart" => RawInput::TouchStart { touches },
                "touchmove" => RawInput::TouchMove { touches },
                _ => RawInput::TouchEnd { touches },
            })
        }
        "touchcancel" => Some(RawInput::TouchCancel),
        _ => None,
    }
}

/// Current viewport size as a resize input.
pub fn resized(window: &Window) -> RawInput {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    RawInput::Resized {
        width: dimension(window.inner_width()),
        height: dimension(window.inner_height()),
    }
}

fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| TouchPoint::new(touch.identifier(), f64::from(touch.client_x())))
        .collect()
}
