//! In-memory ledger of expenses
//!
//! The ledger is an ordered list addressed by 1-based position, the way the
//! session presents it to the user.

use super::expense::Expense;

/// Ordered collection of expenses for the current session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense at the end
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the expense at a 1-based position
    ///
    /// Returns `None` without touching the ledger when the position is outside
    /// `1..=len`. Later expenses shift down by one.
    pub fn remove_at(&mut self, position: usize) -> Option<Expense> {
        if position == 0 || position > self.expenses.len() {
            return None;
        }
        Some(self.expenses.remove(position - 1))
    }

    /// Expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}
