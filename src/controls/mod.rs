//! Imperative drag controls: a registry of draggable elements that an
//! unrelated input source can start dragging.
//!
//! Each draggable element subscribes an [`ElementHandle`] while it is
//! mounted. Anything holding the same [`DragControls`] can then call
//! [`DragControls::start`] with whatever pointer event it received, and
//! every subscribed element begins its own gesture from that event.
//!
//! ```ignore
//! let controls = slot.get_or_create();
//! let subscription = controls.subscribe(&element_handle);
//!
//! // In some other element's pointer-down handler:
//! controls.start(&event, Some(&DragOptions::snap_to_cursor()))?;
//!
//! // On unmount:
//! subscription.unsubscribe();
//! ```

mod handle;
mod slot;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

pub use handle::ElementHandle;
use rustc_hash::FxHashMap;
pub use slot::DragControlsSlot;

use crate::error::DragControlsError;
use crate::input::{normalize, RawInputEvent};
use crate::options::DragOptions;

/// Handle identity: the address of its `Rc` allocation.
type HandleKey = *const ();

fn handle_key(handle: &Weak<dyn ElementHandle>) -> HandleKey {
    handle.as_ptr().cast::<()>()
}

/// One subscribed handle.
///
/// `generation` is unique per insertion, so a subscription only removes
/// the entry it was handed out for.
struct Entry {
    handle: Weak<dyn ElementHandle>,
    generation: u64,
}

#[derive(Default)]
struct Subscribers {
    entries: FxHashMap<HandleKey, Entry>,
    next_generation: u64,
}

/// Registry of element handles that can be started remotely.
///
/// Cloning yields another reference to the same registry. Handles are held
/// weakly and keyed by identity, so subscribing the same `Rc` twice keeps a
/// single entry and one [`Subscription::unsubscribe`] removes it.
///
/// Single-threaded: the registry is `!Send` and every broadcast runs to
/// completion before returning.
#[derive(Clone, Default)]
pub struct DragControls {
    subscribers: Rc<RefCell<Subscribers>>,
}

impl DragControls {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `handle` to the registry if it is not already present.
    ///
    /// The returned [`Subscription`] removes exactly this handle. Dropping
    /// it without calling [`Subscription::unsubscribe`] leaves the handle
    /// subscribed until the handle itself is dropped.
    pub fn subscribe<H: ElementHandle + 'static>(
        &self,
        handle: &Rc<H>,
    ) -> Subscription {
        let weak: Weak<H> = Rc::downgrade(handle);
        let weak: Weak<dyn ElementHandle> = weak;
        let key = handle_key(&weak);

        let (generation, newly_added, total) = {
            let mut subscribers = self.subscribers.borrow_mut();
            let Subscribers {
                entries,
                next_generation,
            } = &mut *subscribers;
            // Handles dropped without unsubscribing leave dead entries behind.
            entries.retain(|_, entry| entry.handle.strong_count() > 0);
            let newly_added = !entries.contains_key(&key);
            let entry = entries.entry(key).or_insert_with(|| {
                *next_generation += 1;
                Entry {
                    handle: weak.clone(),
                    generation: *next_generation,
                }
            });
            (entry.generation, newly_added, entries.len())
        };
        log::debug!(
            "drag handle {key:p} subscribed (new: {newly_added}, total: {total})"
        );

        Subscription {
            subscribers: Rc::downgrade(&self.subscribers),
            handle: weak,
            generation,
            active: Cell::new(true),
        }
    }

    /// Start a drag on every subscribed handle.
    ///
    /// The event is unwrapped from any framework wrapper and normalized
    /// once. Handles are then called in registry order from a snapshot
    /// taken before the first call; subscriptions changed by a handle
    /// during its callback only affect later broadcasts. A panicking
    /// handle is not caught: the panic reaches the caller and the
    /// remaining handles of this broadcast are skipped, but the registry
    /// itself stays intact.
    ///
    /// # Errors
    ///
    /// Returns [`DragControlsError::InvalidEvent`] if the event cannot be
    /// normalized. No handle is called in that case.
    pub fn start(
        &self,
        event: &RawInputEvent,
        options: Option<&DragOptions>,
    ) -> Result<(), DragControlsError> {
        let normalized = normalize(event.native_event())?;
        let handles = self.snapshot();
        log::debug!(
            "starting drag on {} handle(s) from {} input",
            handles.len(),
            normalized.pointer_type.as_str()
        );
        for handle in &handles {
            handle.start(&normalized, options);
        }
        Ok(())
    }

    /// Stop the current gesture on every subscribed handle.
    pub fn stop(&self) {
        let handles = self.snapshot();
        log::debug!("stopping drag on {} handle(s)", handles.len());
        for handle in &handles {
            handle.stop();
        }
    }

    /// Cancel the current gesture on every subscribed handle.
    pub fn cancel(&self) {
        let handles = self.snapshot();
        log::debug!("cancelling drag on {} handle(s)", handles.len());
        for handle in &handles {
            handle.cancel();
        }
    }

    /// Whether `handle` is currently subscribed.
    #[must_use]
    pub fn is_subscribed<H: ElementHandle + 'static>(
        &self,
        handle: &Rc<H>,
    ) -> bool {
        let key = Rc::as_ptr(handle).cast::<()>();
        self.subscribers.borrow().entries.contains_key(&key)
    }

    /// Number of subscribed handles that are still alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers
            .borrow()
            .entries
            .values()
            .filter(|entry| entry.handle.strong_count() > 0)
            .count()
    }

    /// Whether no live handle is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `self` and `other` are the same registry.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.subscribers, &other.subscribers)
    }

    /// Strong references to every live handle.
    ///
    /// The registry borrow ends before this returns, so callbacks are free
    /// to mutate it.
    fn snapshot(&self) -> Vec<Rc<dyn ElementHandle>> {
        let (handles, total) = {
            let subscribers = self.subscribers.borrow();
            let handles: Vec<_> = subscribers
                .entries
                .values()
                .filter_map(|entry| entry.handle.upgrade())
                .collect();
            (handles, subscribers.entries.len())
        };
        if handles.len() < total {
            log::trace!(
                "skipping {} dropped drag handle(s)",
                total - handles.len()
            );
        }
        handles
    }
}

impl fmt::Debug for DragControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragControls")
            .field("subscribers", &self.len())
            .finish_non_exhaustive()
    }
}

/// Removes one handle from a [`DragControls`] registry.
///
/// Returned by [`DragControls::subscribe`]. Only the first call to
/// [`unsubscribe`](Self::unsubscribe) has an effect, and only while the
/// registry entry it was handed out for still exists: once that entry is
/// removed, a later re-subscription of the same handle is left alone.
#[must_use = "keep the subscription to unsubscribe the handle on unmount"]
pub struct Subscription {
    subscribers: Weak<RefCell<Subscribers>>,
    /// Keeps the handle's allocation (and its identity key) from being
    /// reused while this subscription exists.
    handle: Weak<dyn ElementHandle>,
    generation: u64,
    active: Cell<bool>,
}

impl Subscription {
    /// Remove the handle from the registry.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        let Some(subscribers) = self.subscribers.upgrade() else {
            return;
        };
        let key = handle_key(&self.handle);
        let removed = {
            let mut subscribers = subscribers.borrow_mut();
            let current = subscribers
                .entries
                .get(&key)
                .is_some_and(|entry| entry.generation == self.generation);
            current && subscribers.entries.remove(&key).is_some()
        };
        log::debug!("drag handle {key:p} unsubscribed (removed: {removed})");
    }

    /// Whether [`unsubscribe`](Self::unsubscribe) has not been called yet.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("handle", &handle_key(&self.handle))
            .field("generation", &self.generation)
            .field("active", &self.active.get())
            .finish_non_exhaustive()
    }
}
