//! The tax engine: per-state aggregation, rounding, and ranking.
//!
//! One call computes the full ranked picture for an income:
//!
//! 1. Federal marginal rate, looked up once (federal liability does not
//!    depend on the state of residence).
//! 2. FICA tax, computed once (same reasoning).
//! 3. One [`TaxResult`] per table entry, every dollar figure rounded
//!    half-up from its own unrounded amount and every rate computed from
//!    the unrounded fraction.
//! 4. A stable descending sort by annual take-home pay; states with equal
//!    take-home keep the reference table's order.
//!
//! The engine is pure and synchronous. It allocates a fresh result vector
//! per call, reads only the immutable rate table, and performs no I/O, so
//! concurrent calls need no coordination.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{percent_1dp, whole_dollars};
use crate::calculations::federal::FederalSchedule;
use crate::calculations::fica::FicaCalculator;
use crate::models::{StateRate, TakeHome, TaxResult};
use crate::states::StateRateTable;

/// Invalid-income errors. The engine has no other failure mode: once the
/// income passes validation, every downstream step is total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxEngineError {
    /// Income was negative; take-home pay is only defined for non-negative
    /// gross income.
    #[error("income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    /// Income was NaN, infinite, or outside the representable decimal
    /// range. Only reachable through [`annual_income_from_f64`]; a
    /// `Decimal` argument cannot carry these values.
    #[error("income must be a finite dollar amount")]
    NonFiniteIncome,
}

/// Converts a raw float income (e.g. a parsed JSON number) into a validated
/// engine input.
///
/// # Errors
///
/// Returns [`TaxEngineError::NonFiniteIncome`] for NaN, ±∞, or values beyond
/// the decimal range, and [`TaxEngineError::NegativeIncome`] for negative
/// values.
///
/// ```
/// use takehome_core::{TaxEngineError, annual_income_from_f64};
///
/// assert!(annual_income_from_f64(85000.0).is_ok());
/// assert_eq!(
///     annual_income_from_f64(f64::NAN),
///     Err(TaxEngineError::NonFiniteIncome)
/// );
/// ```
pub fn annual_income_from_f64(income: f64) -> Result<Decimal, TaxEngineError> {
    if !income.is_finite() {
        return Err(TaxEngineError::NonFiniteIncome);
    }
    let amount = Decimal::from_f64_retain(income).ok_or(TaxEngineError::NonFiniteIncome)?;
    if amount < Decimal::ZERO {
        return Err(TaxEngineError::NegativeIncome(amount));
    }
    Ok(amount)
}

/// Computes ranked per-state take-home results for an annual income.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::{StateRateTable, TaxEngine};
///
/// let engine = TaxEngine::new(StateRateTable::year_2024());
/// let results = engine.calculate_all_states(dec!(100000)).unwrap();
///
/// assert_eq!(results.len(), 51);
///
/// // A no-income-tax state ranks at the top.
/// let best = &results[0];
/// assert_eq!(best.state_tax, 0);
/// assert_eq!(best.take_home.annual, 70350);
/// ```
#[derive(Debug, Clone)]
pub struct TaxEngine {
    federal: FederalSchedule,
    fica: FicaCalculator,
    states: StateRateTable,
}

impl TaxEngine {
    /// Creates an engine over the given state table with the built-in 2024
    /// federal schedule and FICA parameters.
    pub fn new(states: StateRateTable) -> Self {
        Self {
            federal: FederalSchedule::year_2024(),
            fica: FicaCalculator::year_2024(),
            states,
        }
    }

    /// Creates an engine from explicit parts. The FICA calculator carries
    /// its own validated configuration, so construction cannot produce an
    /// inconsistent engine.
    pub fn with_parts(
        federal: FederalSchedule,
        fica: FicaCalculator,
        states: StateRateTable,
    ) -> Self {
        Self {
            federal,
            fica,
            states,
        }
    }

    /// The state rate table this engine computes over.
    pub fn state_rates(&self) -> &StateRateTable {
        &self.states
    }

    /// Computes one result per table entry, sorted descending by annual
    /// take-home pay.
    ///
    /// The boundary caller is expected to validate income first; the check
    /// here is defensive so the engine never produces partial output from
    /// bad input.
    ///
    /// # Errors
    ///
    /// Returns [`TaxEngineError::NegativeIncome`] for negative income,
    /// before any per-state work is done.
    pub fn calculate_all_states(
        &self,
        income: Decimal,
    ) -> Result<Vec<TaxResult>, TaxEngineError> {
        if income < Decimal::ZERO {
            warn!(%income, "rejecting negative income");
            return Err(TaxEngineError::NegativeIncome(income));
        }

        let federal_rate = self.federal.marginal_rate(income);
        let fica_tax = self.fica.calculate(income).total();
        debug!(%income, %federal_rate, %fica_tax, "ranking states");

        let mut results: Vec<TaxResult> = self
            .states
            .iter()
            .map(|state| self.state_result(income, federal_rate, fica_tax, state))
            .collect();

        // Stable sort: equal take-home keeps the table's canonical order.
        results.sort_by(|a, b| b.take_home.annual.cmp(&a.take_home.annual));

        Ok(results)
    }

    fn state_result(
        &self,
        income: Decimal,
        federal_rate: Decimal,
        fica_tax: Decimal,
        state: &StateRate,
    ) -> TaxResult {
        let federal_tax = income * federal_rate;
        let state_tax = income * state.rate;
        let total_tax = federal_tax + state_tax + fica_tax;
        let take_home = income - total_tax;

        // At zero income the effective rates are 0/0; report 0.0 across the
        // whole rate block instead of propagating an undefined value.
        let (federal_pct, state_pct, fica_pct, total_pct) = if income.is_zero() {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            (
                percent_1dp(federal_rate),
                percent_1dp(state.rate),
                percent_1dp(fica_tax / income),
                percent_1dp(total_tax / income),
            )
        };

        TaxResult {
            state: state.code.clone(),
            take_home: TakeHome {
                annual: whole_dollars(take_home),
                monthly: whole_dollars(take_home / Decimal::from(12)),
                biweekly: whole_dollars(take_home / Decimal::from(26)),
            },
            federal_tax: whole_dollars(federal_tax),
            state_tax: whole_dollars(state_tax),
            fica_tax: whole_dollars(fica_tax),
            total_tax: whole_dollars(total_tax),
            federal_tax_rate: federal_pct,
            state_tax_rate: state_pct,
            fica_tax_rate: fica_pct,
            total_tax_rate: total_pct,
        }
    }
}

impl Default for TaxEngine {
    fn default() -> Self {
        Self::new(StateRateTable::year_2024())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn engine() -> TaxEngine {
        TaxEngine::new(StateRateTable::year_2024())
    }

    fn result_for<'a>(
        results: &'a [TaxResult],
        code: &str,
    ) -> &'a TaxResult {
        results
            .iter()
            .find(|r| r.state == code)
            .unwrap_or_else(|| panic!("missing result for {code}"))
    }

    // =========================================================================
    // input validation tests
    // =========================================================================

    #[test]
    fn negative_income_is_rejected() {
        let engine = engine();

        let result = engine.calculate_all_states(dec!(-1));

        assert_eq!(result, Err(TaxEngineError::NegativeIncome(dec!(-1))));
    }

    #[test]
    fn from_f64_rejects_nan_and_infinities() {
        assert_eq!(
            annual_income_from_f64(f64::NAN),
            Err(TaxEngineError::NonFiniteIncome)
        );
        assert_eq!(
            annual_income_from_f64(f64::INFINITY),
            Err(TaxEngineError::NonFiniteIncome)
        );
        assert_eq!(
            annual_income_from_f64(f64::NEG_INFINITY),
            Err(TaxEngineError::NonFiniteIncome)
        );
    }

    #[test]
    fn from_f64_rejects_negative_values() {
        assert_eq!(
            annual_income_from_f64(-50000.0),
            Err(TaxEngineError::NegativeIncome(dec!(-50000)))
        );
    }

    #[test]
    fn from_f64_accepts_ordinary_incomes() {
        assert_eq!(annual_income_from_f64(85000.0), Ok(dec!(85000)));
        assert_eq!(annual_income_from_f64(0.0), Ok(dec!(0)));
    }

    // =========================================================================
    // shape and ordering tests
    // =========================================================================

    #[test]
    fn produces_one_result_per_state() {
        let engine = engine();

        let results = engine.calculate_all_states(dec!(60000)).unwrap();

        assert_eq!(results.len(), 51);

        let result_codes: HashSet<&str> = results.iter().map(|r| r.state.as_str()).collect();
        let table_codes: HashSet<&str> =
            engine.state_rates().iter().map(|s| s.code.as_str()).collect();
        assert_eq!(result_codes, table_codes);
    }

    #[test]
    fn results_are_sorted_descending_by_annual_take_home() {
        let engine = engine();

        let results = engine.calculate_all_states(dec!(123456.78)).unwrap();

        for pair in results.windows(2) {
            assert!(
                pair[0].take_home.annual >= pair[1].take_home.annual,
                "order violated between {} and {}",
                pair[0].state,
                pair[1].state
            );
        }
    }

    #[test]
    fn tied_states_keep_table_order() {
        let engine = engine();

        let results = engine.calculate_all_states(dec!(100000)).unwrap();

        // The nine no-income-tax states tie for the top and must appear in
        // canonical table order, not alphabetically re-sorted.
        let top: Vec<&str> = results[..9].iter().map(|r| r.state.as_str()).collect();
        assert_eq!(top, ["AK", "FL", "NV", "NH", "SD", "TN", "TX", "WA", "WY"]);
    }

    #[test]
    fn highest_flat_rate_state_ranks_last() {
        let engine = engine();

        let results = engine.calculate_all_states(dec!(100000)).unwrap();

        assert_eq!(results[50].state, "CA");
    }

    // =========================================================================
    // numeric behavior tests
    // =========================================================================

    #[test]
    fn hundred_thousand_in_texas_matches_known_figures() {
        let engine = engine();

        let results = engine.calculate_all_states(dec!(100000)).unwrap();
        let tx = result_for(&results, "TX");

        assert_eq!(tx.federal_tax, 22000);
        assert_eq!(tx.state_tax, 0);
        assert_eq!(tx.fica_tax, 7650);
        assert_eq!(tx.total_tax, 29650);
        assert_eq!(tx.take_home.annual, 70350);
        // 70350 / 12 = 5862.5 and 70350 / 26 = 2705.77, each rounded on
        // its own.
        assert_eq!(tx.take_home.monthly, 5863);
        assert_eq!(tx.take_home.biweekly, 2706);
        assert_eq!(tx.federal_tax_rate, 22.0);
        assert_eq!(tx.state_tax_rate, 0.0);
        assert_eq!(tx.fica_tax_rate, 7.7);
        assert_eq!(tx.total_tax_rate, 29.7);
    }

    #[test]
    fn total_tax_rounds_independently_of_its_components() {
        let engine = engine();

        // At $4,990 in Alabama the components round to 499 + 250 + 382 =
        // 1131, but the unrounded total 1130.235 rounds to 1130.
        let results = engine.calculate_all_states(dec!(4990)).unwrap();
        let al = result_for(&results, "AL");

        assert_eq!(al.federal_tax, 499);
        assert_eq!(al.state_tax, 250);
        assert_eq!(al.fica_tax, 382);
        assert_eq!(al.total_tax, 1130);
        assert_eq!(al.federal_tax + al.state_tax + al.fica_tax - al.total_tax, 1);
    }

    #[test]
    fn take_home_plus_taxes_approximates_income() {
        let engine = engine();

        for income in [dec!(4990), dec!(52345.67), dec!(100000), dec!(250000)] {
            let results = engine.calculate_all_states(income).unwrap();
            for r in &results {
                let reconstructed = r.take_home.annual + r.federal_tax + r.state_tax + r.fica_tax;
                let gap = (Decimal::from(reconstructed) - income).abs();
                assert!(
                    gap <= dec!(2),
                    "{} at {}: reconstructed {} vs income {}",
                    r.state,
                    income,
                    reconstructed,
                    income
                );
            }
        }
    }

    #[test]
    fn zero_income_yields_all_zero_fields() {
        let engine = engine();

        let results = engine.calculate_all_states(dec!(0)).unwrap();

        assert_eq!(results.len(), 51);
        for r in &results {
            assert_eq!(r.take_home.annual, 0);
            assert_eq!(r.take_home.monthly, 0);
            assert_eq!(r.take_home.biweekly, 0);
            assert_eq!(r.federal_tax, 0);
            assert_eq!(r.state_tax, 0);
            assert_eq!(r.fica_tax, 0);
            assert_eq!(r.total_tax, 0);
            // Rates are reported as 0.0, never NaN, at zero income.
            assert_eq!(r.federal_tax_rate, 0.0);
            assert_eq!(r.state_tax_rate, 0.0);
            assert_eq!(r.fica_tax_rate, 0.0);
            assert_eq!(r.total_tax_rate, 0.0);
        }
    }

    #[test]
    fn surcharge_income_reflects_additional_medicare() {
        let engine = engine();

        let results = engine.calculate_all_states(dec!(250000)).unwrap();
        let tx = result_for(&results, "TX");

        // 10453.20 (capped SS) + 3625 (Medicare) + 450 (surcharge)
        assert_eq!(tx.fica_tax, 14528);
        // 250000 × 0.35 federal, no state tax.
        assert_eq!(tx.federal_tax, 87500);
        assert_eq!(tx.total_tax, 102028);
    }

    #[test]
    fn repeated_calls_return_identical_output() {
        let engine = engine();

        let first = engine.calculate_all_states(dec!(77777.77)).unwrap();
        let second = engine.calculate_all_states(dec!(77777.77)).unwrap();

        assert_eq!(first, second);
    }
}
