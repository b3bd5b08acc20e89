//! Tax calculation modules.
//!
//! The calculation pipeline is split the same way the numbers compose:
//! federal bracket lookup ([`federal`]), FICA payroll tax ([`fica`]), and
//! the per-state aggregation, rounding, and ranking ([`engine`]). Shared
//! rounding rules live in [`common`].

pub mod common;
pub mod engine;
pub mod federal;
pub mod fica;

pub use engine::{TaxEngine, TaxEngineError};
pub use federal::{FederalBracket, FederalSchedule};
pub use fica::{FicaBreakdown, FicaCalculator, FicaConfig, FicaConfigError};
