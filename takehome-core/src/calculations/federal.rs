//! Federal income-tax bracket schedule.
//!
//! The schedule answers one question: which marginal rate does an income
//! reach? The engine then applies that single rate to the entire income.
//! This whole-income treatment intentionally mirrors the deployed
//! calculator's simplified behavior (it is not a layered progressive
//! computation), so downstream consumers keep seeing the same numbers.
//!
//! # 2024 single-filer brackets
//!
//! | Income ceiling | Marginal rate |
//! |----------------|---------------|
//! | $11,600        | 10%           |
//! | $47,150        | 12%           |
//! | $100,525       | 22%           |
//! | $191,950       | 24%           |
//! | $243,725       | 32%           |
//! | $609,350       | 35%           |
//! | (none)         | 37%           |
//!
//! Ceilings are inclusive: an income exactly on a ceiling takes the lower
//! bracket's rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bracket of the federal schedule: an optional income ceiling and the
/// marginal rate that applies up to it. The top bracket has no ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalBracket {
    /// Inclusive upper income bound, or `None` for the open top bracket.
    pub ceiling: Option<Decimal>,

    /// Marginal rate as a decimal fraction (e.g. `0.22`).
    pub rate: Decimal,
}

impl FederalBracket {
    fn new(
        ceiling: i64,
        rate_hundredths: i64,
    ) -> Self {
        Self {
            ceiling: Some(Decimal::from(ceiling)),
            rate: Decimal::new(rate_hundredths, 2),
        }
    }

    fn open(rate_hundredths: i64) -> Self {
        Self {
            ceiling: None,
            rate: Decimal::new(rate_hundredths, 2),
        }
    }
}

/// Federal bracket schedule for a single tax year and filing status.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::FederalSchedule;
///
/// let schedule = FederalSchedule::year_2024();
///
/// assert_eq!(schedule.marginal_rate(dec!(11600)), dec!(0.10));
/// assert_eq!(schedule.marginal_rate(dec!(11600.01)), dec!(0.12));
/// assert_eq!(schedule.marginal_rate(dec!(1000000)), dec!(0.37));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederalSchedule {
    brackets: Vec<FederalBracket>,
}

impl FederalSchedule {
    /// Builds the 2024 single-filer schedule.
    pub fn year_2024() -> Self {
        Self {
            brackets: vec![
                FederalBracket::new(11_600, 10),
                FederalBracket::new(47_150, 12),
                FederalBracket::new(100_525, 22),
                FederalBracket::new(191_950, 24),
                FederalBracket::new(243_725, 32),
                FederalBracket::new(609_350, 35),
                FederalBracket::open(37),
            ],
        }
    }

    /// Returns the marginal rate of the top bracket the income reaches.
    ///
    /// Total over all incomes: anything above the last ceiling takes the
    /// open bracket's rate.
    pub fn marginal_rate(
        &self,
        income: Decimal,
    ) -> Decimal {
        for bracket in &self.brackets {
            match bracket.ceiling {
                Some(ceiling) if income > ceiling => continue,
                _ => return bracket.rate,
            }
        }
        // Unreachable for the built-in schedule, which ends with an open
        // bracket; a defensive zero keeps the function total.
        Decimal::ZERO
    }
}

impl Default for FederalSchedule {
    fn default() -> Self {
        Self::year_2024()
    }
}
