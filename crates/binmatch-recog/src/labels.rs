//! Human-readable labels for reference images
//!
//! A label table maps reference names (normally filenames) to display
//! labels. It is read from a JSON object:
//!
//! ```json
//! { "mouse.jpg": "Mouse", "tipex.jpg": "Tipe-x" }
//! ```

use crate::RecogResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Mapping from reference name to label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    labels: HashMap<String, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from a JSON object of strings.
    pub fn from_json_str(json: &str) -> RecogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a table from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> RecogResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let table = Self::from_json_str(&text)?;
        log::debug!(
            "loaded {} labels from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Label for `name`, if one is configured.
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    /// Set the label for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.labels.insert(name.into(), label.into())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
