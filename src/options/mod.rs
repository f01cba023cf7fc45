//! Drag options forwarded to every subscribed handle, with TOML preset
//! support.
//!
//! The registry never reads these; only `snap_to_cursor` has a meaning
//! this crate documents. Every other key is kept in [`DragOptions::extra`]
//! and reaches the drag engine untouched.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DragControlsError;

/// Caller-supplied configuration for one remotely started drag.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct DragOptions {
    /// Move the element so its origin sits under the cursor when the drag
    /// starts.
    pub snap_to_cursor: bool,
    /// Drag-engine settings this layer does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DragOptions {
    /// Options with `snap_to_cursor` enabled.
    #[must_use]
    pub fn snap_to_cursor() -> Self {
        Self {
            snap_to_cursor: true,
            ..Self::default()
        }
    }

    /// Look up an opaque pass-through field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Generate JSON Schema for the recognized fields.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Self)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, DragControlsError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DragControlsError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails if serialization or any filesystem write fails.
    pub fn save(&self, path: &Path) -> Result<(), DragControlsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DragControlsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(DragControlsError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
