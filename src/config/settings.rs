//! User settings for the expense tracker
//!
//! Settings are optional. When `expense-tracker.json` is absent the defaults
//! apply and no file is created.

use serde::Deserialize;

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Abort startup on a ledger line with an unparseable amount
    #[serde(default)]
    pub strict_load: bool,

    /// Append every ledger change to the audit log
    #[serde(default)]
    pub audit_enabled: bool,
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }
}
