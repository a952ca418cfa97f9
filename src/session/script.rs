//! Recordable session event scripts
//!
//! A script is the serialized form of the inbound event surface: clicks,
//! hovers, checks, and quiz advances in delivery order. Scripts round-trip
//! through pretty JSON so a whole interaction can be saved from the CLI and
//! replayed against a fresh (typically seeded) session.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One inbound session event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Pointer click at a track pixel offset
    Click { px: f64 },
    /// Pointer hover at a track pixel offset
    Hover { px: f64 },
    /// Grade the current answer
    Check,
    /// Advance to the next quiz
    Next,
}

/// An ordered recording of session events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Script name, used for filenames and log lines
    pub name: String,
    /// Events in delivery order
    pub events: Vec<SessionEvent>,
}

impl Script {
    /// Create an empty script
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Append an event
    pub fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the script holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Save as pretty JSON
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a script from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let script: Script = serde_json::from_str(&content)
            .map_err(|e| crate::Error::Script(format!("{}: {}", path.display(), e)))?;
        Ok(script)
    }
}
