//! Expense model
//!
//! An expense is an immutable (description, amount) pair. It has two text
//! forms: a display form for the terminal and a line form for the ledger file.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::amount::{Amount, AmountParseError};

/// Separator between description and amount in the ledger file
pub const FIELD_SEPARATOR: char = ',';

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    description: String,
    amount: Amount,
}

impl Expense {
    /// Create a new expense
    ///
    /// No validation is performed: empty descriptions and non-finite amounts
    /// are accepted as-is. A description containing a comma is stored, but
    /// will not be read back as the same record.
    pub fn new(description: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Render the persisted line form: `<description>,<amount>`
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.description, FIELD_SEPARATOR, self.amount)
    }

    /// Parse a persisted line
    ///
    /// The line is split on the first comma only. Returns `None` when the line
    /// has no comma and so is not a record at all.
    pub fn parse_line(line: &str) -> Option<Result<Self, AmountParseError>> {
        let (description, amount) = line.split_once(FIELD_SEPARATOR)?;
        Some(Amount::parse(amount).map(|amount| Self::new(description, amount)))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.description, self.amount)
    }
}
