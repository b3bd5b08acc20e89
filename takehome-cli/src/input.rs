//! Income argument parsing and validation.
//!
//! The engine only accepts a clean non-negative decimal; everything users
//! actually type (`$85,000`, ` 1,200.50 `) is normalized here first.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for unusable income input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIncomeError {
    /// The input was empty after trimming.
    #[error("income is required")]
    Empty,

    /// The input was not a number.
    #[error("invalid income '{0}'")]
    Invalid(String),

    /// The input parsed but was negative.
    #[error("income must be non-negative, got {0}")]
    Negative(Decimal),
}

/// Normalizes input for parsing: trims whitespace and removes `$` and commas
/// (thousands separator).
fn normalize_income_input(s: &str) -> String {
    s.trim().replace(['$', ','], "")
}

/// Parses a user-supplied income string into a non-negative decimal amount.
///
/// Handles `$` prefixes and comma thousands separators (e.g. `"$1,234.56"`).
/// Logs and returns an error for empty, non-numeric, or negative input.
pub fn parse_income(raw: &str) -> Result<Decimal, ParseIncomeError> {
    let normalized = normalize_income_input(raw);
    if normalized.is_empty() {
        return Err(ParseIncomeError::Empty);
    }

    let amount: Decimal = normalized.parse().map_err(|e| {
        tracing::warn!(input = %raw, "invalid income: {}", e);
        ParseIncomeError::Invalid(raw.to_string())
    })?;

    if amount < Decimal::ZERO {
        tracing::warn!(input = %raw, "negative income rejected");
        return Err(ParseIncomeError::Negative(amount));
    }

    Ok(amount)
}
