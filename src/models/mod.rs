//! Core data models for the expense tracker
//!
//! This module contains the expense record, its amount type, and the
//! in-memory ledger that holds them for a session.

pub mod amount;
pub mod expense;
pub mod ledger;

pub use amount::{Amount, AmountParseError};
pub use expense::Expense;
pub use ledger::Ledger;
