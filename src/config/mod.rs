//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Path resolution for the ledger, settings and audit files
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
