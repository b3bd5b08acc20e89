//! FICA payroll tax (Social Security + Medicare).
//!
//! Three components, summed:
//!
//! | Component           | Rule                                            |
//! |---------------------|-------------------------------------------------|
//! | Social Security     | 6.2% of income, capped at the wage base         |
//! | Medicare            | 1.45% of all income, no cap                     |
//! | Additional Medicare | 0.9% of income above the surcharge threshold    |
//!
//! Amounts are returned unrounded; the engine rounds each published figure
//! once, from its own unrounded value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for out-of-range FICA parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FicaConfigError {
    /// The Social Security rate must be between 0 and 1.
    #[error("social security tax rate must be between 0 and 1, got {0}")]
    InvalidSocialSecurityRate(Decimal),

    /// The Medicare rate must be between 0 and 1.
    #[error("medicare tax rate must be between 0 and 1, got {0}")]
    InvalidMedicareRate(Decimal),

    /// The Additional Medicare surcharge rate must be between 0 and 1.
    #[error("additional medicare tax rate must be between 0 and 1, got {0}")]
    InvalidAdditionalMedicareRate(Decimal),

    /// The Social Security wage base must be positive.
    #[error("social security wage base must be positive, got {0}")]
    InvalidWageBase(Decimal),

    /// The Additional Medicare threshold must be non-negative.
    #[error("additional medicare threshold must be non-negative, got {0}")]
    InvalidSurchargeThreshold(Decimal),
}

/// FICA rates and limits for one tax year.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::FicaConfig;
///
/// let config = FicaConfig::year_2024();
///
/// assert_eq!(config.ss_wage_base, dec!(168600));
/// assert_eq!(config.ss_tax_rate, dec!(0.062));
/// assert_eq!(config.additional_medicare_threshold, dec!(200000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaConfig {
    /// Income ceiling above which Social Security tax no longer applies.
    ///
    /// For 2024, $168,600.
    pub ss_wage_base: Decimal,

    /// Employee Social Security rate, typically 6.2%.
    pub ss_tax_rate: Decimal,

    /// Employee Medicare rate, typically 1.45%. Applies to all income.
    pub medicare_tax_rate: Decimal,

    /// Additional Medicare surcharge rate, typically 0.9%.
    pub additional_medicare_rate: Decimal,

    /// Income above this threshold incurs the Additional Medicare surcharge.
    ///
    /// For 2024, $200,000. The surcharge has no upper wage base.
    pub additional_medicare_threshold: Decimal,
}

impl FicaConfig {
    /// Builds the 2024 tax-year configuration.
    pub fn year_2024() -> Self {
        Self {
            ss_wage_base: Decimal::from(168_600),
            ss_tax_rate: Decimal::new(62, 3),
            medicare_tax_rate: Decimal::new(145, 4),
            additional_medicare_rate: Decimal::new(9, 3),
            additional_medicare_threshold: Decimal::from(200_000),
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`FicaConfigError`] if:
    /// - any rate is outside `[0, 1]`
    /// - the wage base is not positive
    /// - the surcharge threshold is negative
    pub fn validate(&self) -> Result<(), FicaConfigError> {
        if self.ss_tax_rate < Decimal::ZERO || self.ss_tax_rate > Decimal::ONE {
            return Err(FicaConfigError::InvalidSocialSecurityRate(self.ss_tax_rate));
        }
        if self.medicare_tax_rate < Decimal::ZERO || self.medicare_tax_rate > Decimal::ONE {
            return Err(FicaConfigError::InvalidMedicareRate(self.medicare_tax_rate));
        }
        if self.additional_medicare_rate < Decimal::ZERO
            || self.additional_medicare_rate > Decimal::ONE
        {
            return Err(FicaConfigError::InvalidAdditionalMedicareRate(
                self.additional_medicare_rate,
            ));
        }
        if self.ss_wage_base <= Decimal::ZERO {
            return Err(FicaConfigError::InvalidWageBase(self.ss_wage_base));
        }
        if self.additional_medicare_threshold < Decimal::ZERO {
            return Err(FicaConfigError::InvalidSurchargeThreshold(
                self.additional_medicare_threshold,
            ));
        }
        Ok(())
    }
}

impl Default for FicaConfig {
    fn default() -> Self {
        Self::year_2024()
    }
}

/// Unrounded FICA components for one income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaBreakdown {
    /// Social Security portion, capped at the wage base.
    pub social_security_tax: Decimal,

    /// Base Medicare portion on all income.
    pub medicare_tax: Decimal,

    /// Additional Medicare surcharge on income above the threshold.
    pub additional_medicare_tax: Decimal,
}

impl FicaBreakdown {
    /// Combined FICA tax.
    pub fn total(&self) -> Decimal {
        self.social_security_tax + self.medicare_tax + self.additional_medicare_tax
    }
}

/// Calculator for combined FICA tax.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::FicaCalculator;
///
/// let fica = FicaCalculator::year_2024();
/// let breakdown = fica.calculate(dec!(100000));
///
/// assert_eq!(breakdown.social_security_tax, dec!(6200.0));
/// assert_eq!(breakdown.medicare_tax, dec!(1450.0));
/// assert_eq!(breakdown.additional_medicare_tax, dec!(0));
/// assert_eq!(breakdown.total(), dec!(7650.0));
/// ```
#[derive(Debug, Clone)]
pub struct FicaCalculator {
    config: FicaConfig,
}

impl FicaCalculator {
    /// Creates a calculator after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FicaConfigError`] if any parameter is out of range. A
    /// validated calculator never fails at calculation time.
    pub fn new(config: FicaConfig) -> Result<Self, FicaConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a calculator with the built-in 2024 parameters.
    pub fn year_2024() -> Self {
        // Built-in constants are known to satisfy validate().
        Self {
            config: FicaConfig::year_2024(),
        }
    }

    /// Computes the FICA components for a non-negative income.
    ///
    /// The caller guarantees `income >= 0`; the rules below are all total
    /// over that domain.
    pub fn calculate(
        &self,
        income: Decimal,
    ) -> FicaBreakdown {
        let social_security_tax = income.min(self.config.ss_wage_base) * self.config.ss_tax_rate;
        let medicare_tax = income * self.config.medicare_tax_rate;

        let excess = (income - self.config.additional_medicare_threshold).max(Decimal::ZERO);
        let additional_medicare_tax = excess * self.config.additional_medicare_rate;

        FicaBreakdown {
            social_security_tax,
            medicare_tax,
            additional_medicare_tax,
        }
    }
}
