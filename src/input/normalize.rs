//! Pointer normalization.
//!
//! Legacy mouse and touch events are rewritten into the unified
//! [`NormalizedPointerEvent`] shape so gesture code never branches on
//! input modality.

use std::borrow::Cow;

use super::event::{
    MouseEventData, NativeEvent, NormalizedPointerEvent, PointerType,
    TouchEventData,
};
use crate::error::DragControlsError;

/// Pointer id the platform assigns to the mouse.
const MOUSE_POINTER_ID: i32 = 1;

/// Convert a native event into the canonical pointer shape.
///
/// Unified pointer events are returned borrowed. Mouse and touch events
/// produce an owned event and log a deprecation warning.
///
/// # Errors
///
/// Returns [`DragControlsError::InvalidEvent`] for a touch event with no
/// active and no changed touches.
pub fn normalize(
    event: &NativeEvent,
) -> Result<Cow<'_, NormalizedPointerEvent>, DragControlsError> {
    match event {
        NativeEvent::Pointer(pointer) => Ok(Cow::Borrowed(pointer)),
        NativeEvent::Mouse(mouse) => {
            warn_deprecated(PointerType::Mouse);
            Ok(Cow::Owned(from_mouse(mouse)))
        }
        NativeEvent::Touch(touch) => {
            warn_deprecated(PointerType::Touch);
            from_touch(touch).map(Cow::Owned)
        }
    }
}

fn warn_deprecated(kind: PointerType) {
    log::warn!(
        "drag controls started from a legacy {} event; pass a pointer event \
         instead",
        kind.as_str()
    );
}

const fn from_mouse(mouse: &MouseEventData) -> NormalizedPointerEvent {
    NormalizedPointerEvent {
        pointer_id: MOUSE_POINTER_ID,
        pointer_type: PointerType::Mouse,
        is_primary: true,
        page: mouse.page,
        client: mouse.client,
        button: mouse.button,
        buttons: mouse.buttons,
        modifiers: mouse.modifiers,
    }
}

fn from_touch(
    touch: &TouchEventData,
) -> Result<NormalizedPointerEvent, DragControlsError> {
    // Ended touches only appear in `changed_touches`.
    let primary = touch
        .touches
        .first()
        .or_else(|| touch.changed_touches.first())
        .ok_or_else(|| {
            DragControlsError::InvalidEvent(
                "touch event has no active or changed touches".to_owned(),
            )
        })?;

    Ok(NormalizedPointerEvent {
        pointer_id: primary.identifier,
        pointer_type: PointerType::Touch,
        is_primary: true,
        page: primary.page,
        client: primary.client,
        button: 0,
        buttons: u16::from(!touch.touches.is_empty()),
        modifiers: touch.modifiers,
    })
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use log::Level;

    use super::*;
    use crate::input::event::{Modifiers, TouchPoint};
    use crate::test_log;

    fn touch_at(identifier: i32, x: f64, y: f64) -> TouchPoint {
        TouchPoint {
            identifier,
            page: DVec2::new(x, y),
            client: DVec2::new(x, y - 2.0),
        }
    }

    #[test]
    fn pointer_event_passes_through_by_reference() {
        let pointer = NormalizedPointerEvent {
            pointer_id: 7,
            pointer_type: PointerType::Pen,
            is_primary: false,
            page: DVec2::new(1.0, 2.0),
            client: DVec2::new(3.0, 4.0),
            ..NormalizedPointerEvent::default()
        };
        let native = NativeEvent::Pointer(pointer);

        let normalized = normalize(&native).unwrap();
        let Cow::Borrowed(borrowed) = normalized else {
            panic!("pointer events must not be copied");
        };
        let NativeEvent::Pointer(original) = &native else {
            unreachable!();
        };
        assert!(std::ptr::eq(borrowed, original));
        assert_eq!(*borrowed, pointer);
    }

    #[test]
    fn mouse_event_becomes_primary_mouse_pointer() {
        let mouse = MouseEventData {
            page: DVec2::new(10.0, 420.0),
            client: DVec2::new(10.0, 20.0),
            button: 0,
            buttons: 1,
            modifiers: Modifiers {
                shift: true,
                ..Modifiers::default()
            },
        };

        let native = NativeEvent::Mouse(mouse);
        let normalized = normalize(&native).unwrap();
        assert_eq!(normalized.client, DVec2::new(10.0, 20.0));
        assert_eq!(normalized.page, DVec2::new(10.0, 420.0));
        assert!(normalized.is_primary);
        assert_eq!(normalized.pointer_type, PointerType::Mouse);
        assert_eq!(normalized.pointer_id, MOUSE_POINTER_ID);
        assert_eq!(normalized.buttons, 1);
        assert!(normalized.modifiers.shift);
    }

    #[test]
    fn touch_uses_first_active_touch() {
        let touch = TouchEventData {
            touches: vec![touch_at(4, 5.0, 7.0), touch_at(9, 50.0, 70.0)],
            changed_touches: vec![touch_at(9, 50.0, 70.0)],
            ..TouchEventData::default()
        };

        let native = NativeEvent::Touch(touch);
        let normalized = normalize(&native).unwrap();
        assert_eq!(normalized.page, DVec2::new(5.0, 7.0));
        assert_eq!(normalized.client, DVec2::new(5.0, 5.0));
        assert_eq!(normalized.pointer_id, 4);
        assert!(normalized.is_primary);
        assert_eq!(normalized.pointer_type, PointerType::Touch);
    }

    #[test]
    fn touch_falls_back_to_changed_touches() {
        let touch = TouchEventData {
            touches: Vec::new(),
            changed_touches: vec![touch_at(2, 30.0, 40.0)],
            ..TouchEventData::default()
        };

        let native = NativeEvent::Touch(touch);
        let normalized = normalize(&native).unwrap();
        assert_eq!(normalized.page, DVec2::new(30.0, 40.0));
        assert_eq!(normalized.pointer_id, 2);
        assert_eq!(normalized.buttons, 0);
    }

    #[test]
    fn touch_without_contacts_is_invalid() {
        let native = NativeEvent::Touch(TouchEventData::default());
        let result = normalize(&native);
        assert!(matches!(result, Err(DragControlsError::InvalidEvent(_))));
    }

    #[test]
    fn only_legacy_input_logs_a_deprecation_warning() {
        let pointer = NativeEvent::Pointer(NormalizedPointerEvent::default());
        let mouse = NativeEvent::Mouse(MouseEventData::default());
        let touch = NativeEvent::Touch(TouchEventData {
            touches: vec![touch_at(0, 1.0, 1.0)],
            ..TouchEventData::default()
        });

        let (_, records) = test_log::capture(|| normalize(&pointer).is_ok());
        assert_eq!(test_log::count(&records, Level::Warn), 0);

        let (_, records) = test_log::capture(|| normalize(&mouse).is_ok());
        assert_eq!(test_log::count(&records, Level::Warn), 1);
        assert!(records[0].1.contains("legacy mouse event"));

        let (_, records) = test_log::capture(|| normalize(&touch).is_ok());
        assert_eq!(test_log::count(&records, Level::Warn), 1);
        assert!(records[0].1.contains("legacy touch event"));
    }
}
