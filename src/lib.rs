// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Imperative drag controls for draggable UI elements.
//!
//! Lets one piece of UI start a drag gesture on other, unrelated draggable
//! elements. Draggable elements subscribe a handle to a shared
//! [`controls::DragControls`] registry; any input handler holding the same
//! registry can then start all of them from the pointer event it received.
//!
//! # Key entry points
//!
//! - [`controls::DragControls`] - subscribe handles, broadcast `start`,
//!   `stop` and `cancel`
//! - [`controls::DragControlsSlot`] - create-once storage for a
//!   component's registry
//! - [`input::normalize`] - turn mouse, touch or pointer input into one
//!   [`input::NormalizedPointerEvent`]
//! - [`options::DragOptions`] - the options bag forwarded to handles
//! - [`replay`] - recorded input sequences for the `drag-controls` binary
//!
//! # Architecture
//!
//! Input arrives as a tagged [`input::RawInputEvent`]; with the `web`
//! feature, `RawInputEvent::from_web_event` builds one from a DOM event.
//! `start` unwraps framework wrappers, normalizes the event once, snapshots
//! the registry and calls every handle from that snapshot. Drag physics
//! (tracking, constraints, momentum) belong to the handle implementors.

pub mod controls;
pub mod error;
pub mod input;
pub mod options;
pub mod replay;
#[cfg(test)]
mod test_log;

pub use controls::{DragControls, DragControlsSlot, ElementHandle, Subscription};
pub use error::DragControlsError;
pub use input::{NormalizedPointerEvent, RawInputEvent};
pub use options::DragOptions;
