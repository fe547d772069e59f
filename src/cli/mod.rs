//! Interactive command-line interface
//!
//! This module contains the menu, the terminal prompt helpers, and the
//! session loop that ties them to the ledger and the store.

pub mod menu;
pub mod session;
pub mod terminal;

pub use menu::{MenuChoice, MenuError};
pub use session::{Session, SessionState};
pub use terminal::Terminal;

use std::io::Write;

use crate::error::TrackerResult;
use crate::models::Ledger;
use crate::storage::ExpenseStore;

/// Load the starting ledger, telling the user what was found
///
/// A missing file is informational. Skipped lines are listed one per line.
/// Strict-mode parse failures and read errors are returned to the caller.
pub fn open_ledger<W: Write>(store: &ExpenseStore, out: &mut W) -> TrackerResult<Ledger> {
    let report = store.load()?;

    if !report.found {
        writeln!(out, "No previous expenses found. Starting fresh.")?;
    }
    for skipped in &report.skipped {
        writeln!(out, "{}", skipped)?;
    }

    Ok(report.into_ledger())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.txt"));
        let mut out = Vec::new();

        let ledger = open_ledger(&store, &mut out).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No previous expenses found. Starting fresh.\n"
        );
    }

    #[test]
    fn test_open_reports_skipped_lines() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.txt"));
        fs::write(store.path(), "Coffee,3.5\nLunch,abc\n").unwrap();
        let mut out = Vec::new();

        let ledger = open_ledger(&store, &mut out).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Skipping malformed line 2: Lunch,abc\n"
        );
    }

    #[test]
    fn test_open_strict_propagates_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.txt")).strict(true);
        fs::write(store.path(), "Lunch,abc\n").unwrap();
        let mut out = Vec::new();

        let err = open_ledger(&store, &mut out).unwrap_err();
        assert!(matches!(err, crate::error::TrackerError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_open_directory_starts_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.txt"));
        fs::create_dir(store.path()).unwrap();
        let mut out = Vec::new();

        let ledger = open_ledger(&store, &mut out).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No previous expenses found. Starting fresh.\n"
        );
    }

    #[test]
    fn test_open_damaged_bytes_keeps_records() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.txt"));
        fs::write(store.path(), b"Rent,950.0\nCaf\xE9,4.5\nBook,12.0\n").unwrap();
        let mut out = Vec::new();

        let ledger = open_ledger(&store, &mut out).unwrap();

        assert_eq!(ledger.len(), 3);
        assert!(out.is_empty());
    }
}
