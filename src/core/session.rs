//! Mutable configuration shared by commands for one console lifetime

use serde::{Deserialize, Serialize};

/// Cross-command session values owned by a `Console`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    save_directory: Option<String>,
}

impl SessionState {
    /// Create a session with every value unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Minecraft saves directory, if one has been set
    pub fn save_directory(&self) -> Option<&str> {
        self.save_directory.as_deref()
    }

    /// Overwrite the saves directory. The value is stored as typed.
    pub fn set_save_directory(&mut self, path: impl Into<String>) {
        self.save_directory = Some(path.into());
    }
}
