//! Crate-level error types.

use std::fmt;

/// Errors produced by the drag-controls crate.
#[derive(Debug)]
pub enum DragControlsError {
    /// A touch event reached the normalizer with no contact points in
    /// either its active or its changed list.
    InvalidEvent(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A replay file could not be decoded.
    Replay(String),
}

impl fmt::Display for DragControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEvent(msg) => write!(f, "invalid input event: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Replay(msg) => write!(f, "replay error: {msg}"),
        }
    }
}

impl std::error::Error for DragControlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DragControlsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DragControlsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Replay(e.to_string())
    }
}
