use serde::{Deserialize, Serialize};

/// Take-home pay for one state, broken down by pay period.
///
/// Each figure is rounded to whole dollars independently from the unrounded
/// annual amount (annual ÷ 12, annual ÷ 26), so `monthly × 12` is generally
/// not exactly `annual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeHome {
    /// Annual take-home pay in whole dollars.
    pub annual: i64,

    /// Monthly take-home pay in whole dollars.
    pub monthly: i64,

    /// Biweekly (26 pay periods) take-home pay in whole dollars.
    pub biweekly: i64,
}

/// Computed outcome for a single state at a given income.
///
/// Produced fresh on every engine call and owned by the caller; nothing is
/// cached or shared between calls.
///
/// Every dollar field is rounded half-up from its own unrounded amount, not
/// derived from other rounded fields. In particular `total_tax` is rounded
/// from the unrounded total, so it may differ by a dollar or two from
/// `federal_tax + state_tax + fica_tax`.
///
/// Rate fields are percentages with one decimal place, computed from the
/// unrounded fractions of income. At zero income every rate is reported as
/// `0.0` rather than an undefined 0/0 ratio.
///
/// Serialized field names are camelCase (`takeHome`, `federalTaxRate`, …),
/// matching the JSON shape consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    /// Two-letter state code; joins against state metadata held by the caller.
    pub state: String,

    /// Take-home pay by pay period.
    pub take_home: TakeHome,

    /// Federal income tax in whole dollars.
    pub federal_tax: i64,

    /// State income tax in whole dollars.
    pub state_tax: i64,

    /// Combined FICA (Social Security + Medicare) tax in whole dollars.
    pub fica_tax: i64,

    /// Total tax in whole dollars, rounded from the unrounded sum.
    pub total_tax: i64,

    /// Federal marginal rate as a percentage (one decimal place).
    pub federal_tax_rate: f64,

    /// State flat rate as a percentage (one decimal place).
    pub state_tax_rate: f64,

    /// FICA tax as a percentage of income (one decimal place).
    pub fica_tax_rate: f64,

    /// Total tax as a percentage of income (one decimal place).
    pub total_tax_rate: f64,
}
