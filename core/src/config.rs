//! Persisted application settings, loaded via confy.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_NAME: &str = "armory";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the roster JSON file.
    pub data_path: PathBuf,
    /// Swap `.` and `,` in formatted numbers.
    pub european_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/roster.json"),
            european_numbers: false,
        }
    }
}

impl Settings {
    /// Load settings from the platform config directory, falling back to
    /// defaults if the file is missing or unreadable.
    pub fn load() -> Self {
        confy::load(APP_NAME, None).unwrap_or_default()
    }

    pub fn store(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, None, self)
    }
}
