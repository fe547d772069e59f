//! Expense display formatting
//!
//! Formats the ledger as the numbered list shown by View and Delete.

use crate::models::Expense;

/// Message shown when the ledger has no records
pub const EMPTY_LEDGER_MESSAGE: &str = "No expenses recorded yet.";

/// Format a single numbered row
pub fn format_expense_row(position: usize, expense: &Expense) -> String {
    format!("{}. {}", position, expense)
}

/// Format the ledger as a numbered list, 1-based, in insertion order
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_LEDGER_MESSAGE);
    }

    let mut output = String::from("\n=== Expenses ===\n");
    for (index, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_row(index + 1, expense));
        output.push('\n');
    }

    output
}
