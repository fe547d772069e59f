//! Amount type for expense values
//!
//! Amounts are plain IEEE doubles. Their text form always carries a fraction
//! (`3.5`, `12.0`) and switches to `1.0E7` style outside `[0.001, 1e7)`. Every
//! written amount parses back to the same value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Magnitudes in `[PLAIN_MIN, PLAIN_MAX)` print in plain decimal notation
const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// A decimal expense amount with no currency attached
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse an amount, ignoring surrounding whitespace
    ///
    /// Accepts `12`, `3.50`, `-4.25`, `1.0E7`, `NaN` and `Infinity`.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        trimmed
            .parse::<f64>()
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = value.abs();
        if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
            // Debug keeps a trailing ".0" on integral values
            return write!(f, "{:?}", value);
        }

        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));

        if mantissa.contains('.') {
            write!(f, "{}E{}", mantissa, exponent)
        } else {
            write!(f, "{}.0E{}", mantissa, exponent)
        }
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "empty amount"),
            AmountParseError::InvalidFormat(s) => write!(f, "invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
