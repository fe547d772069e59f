//! Storage layer for the expense tracker
//!
//! The ledger is persisted as a flat text file with one `description,amount`
//! record per line. The whole file is read once at startup and replaced
//! wholesale on exit.

pub mod file_io;

pub use file_io::{read_lines, write_lines_atomic, LINE_ENDING};

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Ledger};

/// A ledger line that was dropped during a lenient load
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line: usize,
    pub content: String,
    pub reason: String,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping malformed line {}: {}", self.line, self.content)
    }
}

/// Result of loading the ledger file
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Records in file order
    pub expenses: Vec<Expense>,
    /// Lines with an unparseable amount (lenient mode only)
    pub skipped: Vec<SkippedLine>,
    /// False when there was no prior data to read
    pub found: bool,
}

impl LoadReport {
    /// Build a ledger from the loaded records
    pub fn into_ledger(self) -> Ledger {
        Ledger::from(self.expenses)
    }
}

/// Reads and writes the ledger file
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
    strict: bool,
}

impl ExpenseStore {
    /// Create a lenient store for the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            strict: false,
        }
    }

    /// Abort loading on the first malformed amount instead of skipping it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record from the ledger file
    ///
    /// A missing or unopenable file yields an empty report with `found` unset.
    /// Lines without a comma are ignored. Lines whose amount does not parse are
    /// recorded in `skipped`, or fail the load with [`TrackerError::Parse`] when
    /// the store is strict.
    pub fn load(&self) -> TrackerResult<LoadReport> {
        let lines = match read_lines(&self.path)? {
            Some(lines) => lines,
            None => return Ok(LoadReport::default()),
        };

        let mut report = LoadReport {
            found: true,
            ..LoadReport::default()
        };

        for (index, line) in lines.into_iter().enumerate() {
            match Expense::parse_line(&line) {
                None => continue,
                Some(Ok(expense)) => report.expenses.push(expense),
                Some(Err(e)) if self.strict => {
                    return Err(TrackerError::Parse {
                        line: index + 1,
                        content: line,
                        reason: e.to_string(),
                    });
                }
                Some(Err(e)) => report.skipped.push(SkippedLine {
                    line: index + 1,
                    content: line,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(report)
    }

    /// Replace the ledger file with the given records
    pub fn save(&self, expenses: &[Expense]) -> TrackerResult<()> {
        write_lines_atomic(&self.path, expenses.iter().map(Expense::to_line))
    }
}
