//! Expense Tracker - interactive command-line expense ledger
//!
//! This library provides the core functionality for the expense tracker: a
//! list of (description, amount) records kept in memory for a session and
//! persisted to a flat `description,amount` text file between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and optional settings
//! - `error`: Custom error types
//! - `models`: Expense, amount and ledger types
//! - `storage`: Flat-file persistence with atomic writes
//! - `display`: Terminal formatting of the ledger
//! - `audit`: Optional audit log of ledger changes
//! - `cli`: Menu, prompts and the interactive session loop
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::new();
//! let store = ExpenseStore::new(paths.ledger_file());
//! let ledger = store.load()?.into_ledger();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
