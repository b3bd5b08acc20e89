use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat income-tax rate for a single state.
///
/// `rate` is a decimal fraction in `[0, 1)` applied uniformly to the whole
/// income; states without an income tax carry a rate of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRate {
    /// Two-letter USPS state code (e.g. `"CA"`, `"DC"`). Unique per table.
    pub code: String,

    /// Flat tax rate as a decimal fraction (e.g. `0.050` for 5%).
    pub rate: Decimal,
}
