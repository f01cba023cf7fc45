//! Replays a recorded input sequence through a drag-controls registry.

use std::path::Path;
use std::rc::Rc;

use drag_controls::input::PointKind;
use drag_controls::{
    replay, DragControls, DragControlsError, DragControlsSlot, DragOptions,
    ElementHandle, NormalizedPointerEvent,
};

/// Stand-in drag engine that logs what it would start dragging from.
struct LoggingHandle {
    name: &'static str,
}

impl ElementHandle for LoggingHandle {
    fn start(
        &self,
        event: &NormalizedPointerEvent,
        options: Option<&DragOptions>,
    ) {
        let origin = event.point(PointKind::Page);
        log::info!(
            "{}: start {} pointer {} at page ({}, {}) client ({}, {}), \
             snap_to_cursor: {}",
            self.name,
            event.pointer_type.as_str(),
            event.pointer_id,
            origin.x,
            origin.y,
            event.client.x,
            event.client.y,
            options.is_some_and(|o| o.snap_to_cursor),
        );
    }

    fn stop(&self) {
        log::info!("{}: stop", self.name);
    }
}

fn replay_file(
    controls: &DragControls,
    events_path: &Path,
    options: Option<&DragOptions>,
) -> Result<(), DragControlsError> {
    let events = replay::load_events(events_path)?;
    log::info!("replaying {} event(s)", events.len());
    for (idx, event) in events.iter().enumerate() {
        if let Err(e) = controls.start(event, options) {
            log::error!("event {idx}: {e}");
        }
        controls.stop();
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(events_path) = args.next() else {
        log::error!("Usage: drag-controls <events.json> [options.toml]");
        std::process::exit(1);
    };

    let options = match args.next().map(|path| DragOptions::load(Path::new(&path)))
    {
        None => None,
        Some(Ok(options)) => Some(options),
        Some(Err(e)) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let slot = DragControlsSlot::new();
    let controls = slot.get_or_create();
    let handles = [
        Rc::new(LoggingHandle { name: "card" }),
        Rc::new(LoggingHandle { name: "thumbnail" }),
    ];
    let subscriptions: Vec<_> =
        handles.iter().map(|handle| controls.subscribe(handle)).collect();

    let result = replay_file(controls, Path::new(&events_path), options.as_ref());

    for subscription in &subscriptions {
        subscription.unsubscribe();
    }

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
