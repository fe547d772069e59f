//! Audit entry data structures
//!
//! Defines the operations that change the ledger and the entry format
//! written for each of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense appended to the ledger
    Add,
    /// Expense removed from the ledger
    Delete,
    /// Ledger written to disk
    Save,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Save => write!(f, "SAVE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// 1-based ledger position affected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// The expense added or removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense: Option<Expense>,

    /// Number of records written (saves only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

impl AuditEntry {
    /// Create an entry for an appended expense
    pub fn add(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            position: Some(position),
            expense: Some(expense.clone()),
            record_count: None,
        }
    }

    /// Create an entry for a removed expense
    pub fn delete(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position: Some(position),
            expense: Some(expense.clone()),
            record_count: None,
        }
    }

    /// Create an entry for a ledger save
    pub fn save(record_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Save,
            position: None,
            expense: None,
            record_count: Some(record_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Add.to_string(), "ADD");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::Save.to_string(), "SAVE");
    }

    #[test]
    fn test_add_entry() {
        let entry = AuditEntry::add(1, &Expense::new("Coffee", 3.5));

        assert_eq!(entry.operation, Operation::Add);
        assert_eq!(entry.position, Some(1));
        assert_eq!(entry.expense, Some(Expense::new("Coffee", 3.5)));
        assert!(entry.record_count.is_none());
    }

    #[test]
    fn test_save_entry_skips_empty_fields() {
        let entry = AuditEntry::save(4);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["operation"], "save");
        assert_eq!(json["record_count"], 4);
        assert!(json.get("expense").is_none());
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::delete(2, &Expense::new("Book", 12.0));

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Delete);
        assert_eq!(deserialized.expense, Some(Expense::new("Book", 12.0)));
    }
}
