//! Recorded input sequences, stored as a JSON array of
//! [`RawInputEvent`]s.
//!
//! ```json
//! [
//!   { "native": { "type": "pointer", "pointer_type": "pen", "page": [4, 8] } },
//!   { "synthetic": { "native_event": { "type": "mouse", "client": [10, 20] } } }
//! ]
//! ```

use std::path::Path;

use crate::error::DragControlsError;
use crate::input::RawInputEvent;

/// Parse a JSON event list.
///
/// # Errors
///
/// Returns [`DragControlsError::Replay`] if the JSON does not describe a
/// list of events.
pub fn parse_events(json: &str) -> Result<Vec<RawInputEvent>, DragControlsError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON event list from disk.
///
/// # Errors
///
/// Returns [`DragControlsError::Io`] if the file cannot be read and
/// [`DragControlsError::Replay`] if it cannot be parsed.
pub fn load_events(path: &Path) -> Result<Vec<RawInputEvent>, DragControlsError> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content)
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::input::{NativeEvent, PointerType};

    #[test]
    fn parses_every_event_shape() {
        let json = r#"[
            { "native": { "type": "pointer", "pointer_type": "pen", "page": [4, 8] } },
            { "native": { "type": "touch", "changed_touches": [ { "identifier": 2 } ] } },
            { "synthetic": { "native_event": { "type": "mouse", "client": [10, 20] } } }
        ]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events.len(), 3);

        let NativeEvent::Pointer(pointer) = events[0].native_event() else {
            panic!("expected pointer event");
        };
        assert_eq!(pointer.pointer_type, PointerType::Pen);
        assert_eq!(pointer.page, DVec2::new(4.0, 8.0));
        assert!(pointer.is_primary);

        assert!(matches!(events[1].native_event(), NativeEvent::Touch(_)));
        assert!(matches!(events[2], RawInputEvent::Synthetic(_)));
    }

    #[test]
    fn malformed_json_is_a_replay_error() {
        let result = parse_events(r#"[{ "native": { "type": "wheel" } }]"#);
        assert!(matches!(result, Err(DragControlsError::Replay(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_events(Path::new("/nonexistent/drag-events.json"));
        assert!(matches!(result, Err(DragControlsError::Io(_))));
    }
}
