use std::cell::OnceCell;

use super::DragControls;

/// Per-component storage for a [`DragControls`] registry.
///
/// The owning component keeps one slot in its own state. The registry is
/// created the first time it is asked for and the same instance is handed
/// out for the rest of the component's life; dropping the component drops
/// the slot and the registry with it.
#[derive(Debug, Default)]
pub struct DragControlsSlot {
    controls: OnceCell<DragControls>,
}

impl DragControlsSlot {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            controls: OnceCell::new(),
        }
    }

    /// The component's registry, created on first call.
    pub fn get_or_create(&self) -> &DragControls {
        self.controls.get_or_init(|| {
            log::debug!("creating drag controls");
            DragControls::new()
        })
    }

    /// The registry if it has been created.
    #[must_use]
    pub fn get(&self) -> Option<&DragControls> {
        self.controls.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_creates_once() {
        let slot = DragControlsSlot::new();
        assert!(slot.get().is_none());

        let first = slot.get_or_create().clone();
        let second = slot.get_or_create();
        assert!(first.ptr_eq(second));
        assert!(slot.get().is_some_and(|controls| controls.ptr_eq(&first)));
    }

    #[test]
    fn separate_slots_hold_separate_registries() {
        let a = DragControlsSlot::default();
        let b = DragControlsSlot::default();
        assert!(!a.get_or_create().ptr_eq(b.get_or_create()));
    }
}
