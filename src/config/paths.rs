//! Path management for the expense tracker
//!
//! Every file lives under a single base directory. In normal use that is the
//! process working directory, so the ledger is always `./expenses.txt`.

use std::path::PathBuf;

/// Ledger file name
pub const LEDGER_FILE: &str = "expenses.txt";
/// Optional settings file name
pub const SETTINGS_FILE: &str = "expense-tracker.json";
/// Audit log file name
pub const AUDIT_LOG_FILE: &str = "expenses-audit.log";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone, Default)]
pub struct TrackerPaths {
    /// Base directory; empty means the working directory
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths relative to the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join(LEDGER_FILE)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(AUDIT_LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_working_directory() {
        let paths = TrackerPaths::new();
        assert_eq!(paths.ledger_file(), PathBuf::from("expenses.txt"));
        assert_eq!(paths.settings_file(), PathBuf::from("expense-tracker.json"));
    }

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.ledger_file(), temp_dir.path().join("expenses.txt"));
        assert_eq!(
            paths.audit_log(),
            temp_dir.path().join("expenses-audit.log")
        );
    }
}
