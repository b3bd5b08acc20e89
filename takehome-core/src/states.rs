//! Embedded state flat-rate reference table.
//!
//! The table is fixed configuration for one tax year, built once at startup
//! and passed explicitly into the engine. There is no global mutable state
//! and no reload lifecycle; a new tax year means a new constructor.

use rust_decimal::Decimal;

use crate::models::StateRate;

/// 2024 flat state income-tax rates in thousandths (e.g. `133` = 13.3%).
///
/// One entry per state plus DC. Order is alphabetical by full state name and
/// is the canonical tie-break order when two states produce the same
/// take-home pay.
const STATE_RATES_2024: [(&str, i64); 51] = [
    ("AL", 50),
    ("AK", 0),
    ("AZ", 45),
    ("AR", 55),
    ("CA", 133),
    ("CO", 44),
    ("CT", 70),
    ("DE", 66),
    ("DC", 107),
    ("FL", 0),
    ("GA", 57),
    ("HI", 110),
    ("ID", 58),
    ("IL", 49),
    ("IN", 32),
    ("IA", 60),
    ("KS", 57),
    ("KY", 50),
    ("LA", 42),
    ("ME", 75),
    ("MD", 59),
    ("MA", 50),
    ("MI", 42),
    ("MN", 99),
    ("MS", 50),
    ("MO", 54),
    ("MT", 68),
    ("NE", 69),
    ("NV", 0),
    ("NH", 0),
    ("NJ", 108),
    ("NM", 59),
    ("NY", 109),
    ("NC", 49),
    ("ND", 29),
    ("OH", 39),
    ("OK", 48),
    ("OR", 99),
    ("PA", 31),
    ("RI", 59),
    ("SC", 70),
    ("SD", 0),
    ("TN", 0),
    ("TX", 0),
    ("UT", 49),
    ("VT", 87),
    ("VA", 57),
    ("WA", 0),
    ("WV", 65),
    ("WI", 75),
    ("WY", 0),
];

/// Immutable table of flat state tax rates, one entry per state plus DC.
///
/// Iteration order is the canonical source order; the engine relies on it
/// for deterministic tie-breaking between equally-ranked states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRateTable {
    rates: Vec<StateRate>,
}

impl StateRateTable {
    /// Builds the 2024 tax-year table (50 states + DC, 51 entries).
    pub fn year_2024() -> Self {
        let rates = STATE_RATES_2024
            .iter()
            .map(|&(code, mills)| StateRate {
                code: code.to_string(),
                rate: Decimal::new(mills, 3),
            })
            .collect();
        Self { rates }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table is empty. Never true for a built-in tax year.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates the entries in canonical table order.
    pub fn iter(&self) -> impl Iterator<Item = &StateRate> {
        self.rates.iter()
    }

    /// Looks up a state by its two-letter code.
    pub fn get(
        &self,
        code: &str,
    ) -> Option<&StateRate> {
        self.rates.iter().find(|s| s.code == code)
    }
}

impl Default for StateRateTable {
    fn default() -> Self {
        Self::year_2024()
    }
}
