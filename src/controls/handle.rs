use crate::input::NormalizedPointerEvent;
use crate::options::DragOptions;

/// One draggable element's willingness to be started remotely.
///
/// Implemented by the per-element drag engine. Handles are shared through
/// `Rc` and called through `&self`, so implementors keep their gesture
/// state behind `Cell`/`RefCell`. A handle may subscribe or unsubscribe
/// itself (or others) from inside any of these callbacks.
pub trait ElementHandle {
    /// Begin a drag gesture from `event`.
    ///
    /// `options` is forwarded exactly as the caller passed it to
    /// [`DragControls::start`](super::DragControls::start).
    fn start(
        &self,
        event: &NormalizedPointerEvent,
        options: Option<&DragOptions>,
    );

    /// End the current gesture as if the pointer were released.
    fn stop(&self) {}

    /// Abort the current gesture without release behavior.
    fn cancel(&self) {}
}
