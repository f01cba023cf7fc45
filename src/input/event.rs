use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Input modality reported by a normalized pointer event.
///
/// Serialized as the lowercase strings the platform uses (`"mouse"`,
/// `"touch"`, `"pen"`), so replay files stay readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    /// Mouse or trackpad.
    #[default]
    Mouse,
    /// Finger on a touch surface.
    Touch,
    /// Stylus.
    Pen,
    /// A unified pointer event whose device kind the platform did not
    /// report.
    Pointer,
}

impl PointerType {
    /// Platform string for this pointer type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Touch => "touch",
            Self::Pen => "pen",
            Self::Pointer => "pointer",
        }
    }
}

/// Which coordinate space to read a point from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointKind {
    /// Document-relative coordinates (includes scroll offset).
    #[default]
    Page,
    /// Viewport-relative coordinates.
    Client,
}

/// Keyboard modifier state captured with a pointer or mouse event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Shift held.
    pub shift: bool,
    /// Control held.
    pub ctrl: bool,
    /// Alt / Option held.
    pub alt: bool,
    /// Meta / Command held.
    pub meta: bool,
}

/// Canonical pointer representation consumed by drag handles.
///
/// Unified pointer events already have this shape and travel through the
/// normalizer untouched. Legacy mouse and touch events are rewritten into
/// it with `is_primary` forced to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedPointerEvent {
    /// Platform pointer identifier (`1` for the mouse, the touch
    /// identifier for touches).
    pub pointer_id: i32,
    /// Device kind that produced the event.
    pub pointer_type: PointerType,
    /// Whether this is the primary contact point.
    pub is_primary: bool,
    /// Document-relative position.
    pub page: DVec2,
    /// Viewport-relative position.
    pub client: DVec2,
    /// Button that changed state (`0` = main button, `-1` = none).
    pub button: i16,
    /// Bitmask of buttons currently held.
    pub buttons: u16,
    /// Modifier keys held when the event fired.
    pub modifiers: Modifiers,
}

impl Default for NormalizedPointerEvent {
    fn default() -> Self {
        Self {
            pointer_id: 1,
            pointer_type: PointerType::Mouse,
            is_primary: true,
            page: DVec2::ZERO,
            client: DVec2::ZERO,
            button: 0,
            buttons: 0,
            modifiers: Modifiers::default(),
        }
    }
}

impl NormalizedPointerEvent {
    /// Position in the requested coordinate space.
    #[must_use]
    pub const fn point(&self, kind: PointKind) -> DVec2 {
        match kind {
            PointKind::Page => self.page,
            PointKind::Client => self.client,
        }
    }
}

/// A legacy mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseEventData {
    /// Document-relative position.
    pub page: DVec2,
    /// Viewport-relative position.
    pub client: DVec2,
    /// Button that changed state.
    pub button: i16,
    /// Bitmask of buttons currently held.
    pub buttons: u16,
    /// Modifier keys held when the event fired.
    pub modifiers: Modifiers,
}

/// One contact point of a legacy touch event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchPoint {
    /// Identifier stable for the lifetime of the contact.
    pub identifier: i32,
    /// Document-relative position.
    pub page: DVec2,
    /// Viewport-relative position.
    pub client: DVec2,
}

/// A legacy multi-touch event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchEventData {
    /// Contacts currently on the surface.
    pub touches: Vec<TouchPoint>,
    /// Contacts that changed in this event (ended contacts on release).
    pub changed_touches: Vec<TouchPoint>,
    /// Modifier keys held when the event fired.
    pub modifiers: Modifiers,
}

/// A platform input event, tagged by the adapter that received it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NativeEvent {
    /// Unified pointer event.
    Pointer(NormalizedPointerEvent),
    /// Legacy mouse event.
    Mouse(MouseEventData),
    /// Legacy touch event.
    Touch(TouchEventData),
}

impl NativeEvent {
    /// Whether this event comes from the pointer a single-pointer gesture
    /// should follow.
    ///
    /// Mouse and pointer events qualify only for the main button (and,
    /// for pointer events, the primary pointer). Touch events qualify
    /// while at most one finger is down.
    #[must_use]
    pub const fn is_primary_pointer(&self) -> bool {
        match self {
            Self::Pointer(event) => event.is_primary && event.button <= 0,
            Self::Mouse(event) => event.button <= 0,
            Self::Touch(event) => event.touches.len() <= 1,
        }
    }
}

/// UI-framework wrapper around a native event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticEvent {
    /// The platform event the framework wrapped.
    pub native_event: NativeEvent,
}

/// Any event a caller may hand to
/// [`DragControls::start`](crate::controls::DragControls::start).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawInputEvent {
    /// An event straight from the platform.
    Native(NativeEvent),
    /// A framework-wrapped event.
    Synthetic(SyntheticEvent),
}

impl RawInputEvent {
    /// The platform event, unwrapping a framework wrapper if present.
    #[must_use]
    pub const fn native_event(&self) -> &NativeEvent {
        match self {
            Self::Native(event) => event,
            Self::Synthetic(wrapper) => &wrapper.native_event,
        }
    }
}

impl From<NativeEvent> for RawInputEvent {
    fn from(event: NativeEvent) -> Self {
        Self::Native(event)
    }
}

impl From<SyntheticEvent> for RawInputEvent {
    fn from(event: SyntheticEvent) -> Self {
        Self::Synthetic(event)
    }
}

impl From<NormalizedPointerEvent> for RawInputEvent {
    fn from(event: NormalizedPointerEvent) -> Self {
        Self::Native(NativeEvent::Pointer(event))
    }
}

impl From<MouseEventData> for RawInputEvent {
    fn from(event: MouseEventData) -> Self {
        Self::Native(NativeEvent::Mouse(event))
    }
}

impl From<TouchEventData> for RawInputEvent {
    fn from(event: TouchEventData) -> Self {
        Self::Native(NativeEvent::Touch(event))
    }
}
