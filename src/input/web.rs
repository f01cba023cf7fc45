//! Browser adapter.
//!
//! Narrows a `web_sys` event once, at the boundary, into the tagged
//! [`RawInputEvent`] the rest of the crate consumes.

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, PointerEvent, Touch, TouchEvent, TouchList};

use super::event::{
    Modifiers, MouseEventData, NativeEvent, NormalizedPointerEvent,
    PointerType, RawInputEvent, TouchEventData, TouchPoint,
};

/// Modifier state of any DOM event exposing the `*_key()` accessors.
macro_rules! modifiers_of {
    ($event:expr) => {
        Modifiers {
            shift: $event.shift_key(),
            ctrl: $event.ctrl_key(),
            alt: $event.alt_key(),
            meta: $event.meta_key(),
        }
    };
}

impl RawInputEvent {
    /// Tag a DOM event by its concrete interface.
    ///
    /// Returns `None` for events that carry no pointer position (keyboard,
    /// focus, ...).
    #[must_use]
    pub fn from_web_event(event: &Event) -> Option<Self> {
        // PointerEvent inherits from MouseEvent, so it must be tried first.
        if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
            return Some(Self::from(pointer));
        }
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            return Some(Self::from(mouse));
        }
        event.dyn_ref::<TouchEvent>().map(Self::from)
    }
}

impl From<&PointerEvent> for RawInputEvent {
    fn from(event: &PointerEvent) -> Self {
        let pointer_type = match event.pointer_type().as_str() {
            "mouse" => PointerType::Mouse,
            "touch" => PointerType::Touch,
            "pen" => PointerType::Pen,
            _ => PointerType::Pointer,
        };
        Self::Native(NativeEvent::Pointer(NormalizedPointerEvent {
            pointer_id: event.pointer_id(),
            pointer_type,
            is_primary: event.is_primary(),
            page: DVec2::new(f64::from(event.page_x()), f64::from(event.page_y())),
            client: DVec2::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ),
            button: event.button(),
            buttons: event.buttons(),
            modifiers: modifiers_of!(event),
        }))
    }
}

impl From<&MouseEvent> for RawInputEvent {
    fn from(event: &MouseEvent) -> Self {
        Self::Native(NativeEvent::Mouse(MouseEventData {
            page: DVec2::new(f64::from(event.page_x()), f64::from(event.page_y())),
            client: DVec2::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ),
            button: event.button(),
            buttons: event.buttons(),
            modifiers: modifiers_of!(event),
        }))
    }
}

impl From<&TouchEvent> for RawInputEvent {
    fn from(event: &TouchEvent) -> Self {
        Self::Native(NativeEvent::Touch(TouchEventData {
            touches: touch_points(&event.touches()),
            changed_touches: touch_points(&event.changed_touches()),
            modifiers: modifiers_of!(event),
        }))
    }
}

fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .map(|touch| touch_point(&touch))
        .collect()
}

fn touch_point(touch: &Touch) -> TouchPoint {
    TouchPoint {
        identifier: touch.identifier(),
        page: DVec2::new(f64::from(touch.page_x()), f64::from(touch.page_y())),
        client: DVec2::new(
            f64::from(touch.client_x()),
            f64::from(touch.client_y()),
        ),
    }
}
