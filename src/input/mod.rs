//! Input handling: the tagged event types accepted at the crate boundary
//! and the normalizer that turns them into one canonical pointer shape.

/// Tagged platform events and the canonical pointer event.
pub mod event;
/// Converts legacy mouse/touch events into pointer events.
pub mod normalize;
/// `web_sys` adapters (browser builds).
#[cfg(feature = "web")]
pub mod web;

pub use event::{
    Modifiers, MouseEventData, NativeEvent, NormalizedPointerEvent, PointKind,
    PointerType, RawInputEvent, SyntheticEvent, TouchEventData, TouchPoint,
};
pub use normalize::normalize;
