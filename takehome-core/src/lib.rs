//! Take-home pay estimation across all US states.
//!
//! Given an annual gross income, [`TaxEngine`] produces one result per state
//! (50 states plus DC) with the estimated federal, state, and FICA tax and
//! the remaining take-home pay, ranked from highest to lowest take-home.
//!
//! The engine is a pure function over an embedded reference table: no I/O,
//! no shared mutable state, safe to call from any number of threads.

pub mod calculations;
pub mod models;
pub mod states;

pub use calculations::engine::{TaxEngine, TaxEngineError, annual_income_from_f64};
pub use calculations::federal::{FederalBracket, FederalSchedule};
pub use calculations::fica::{FicaBreakdown, FicaCalculator, FicaConfig, FicaConfigError};
pub use models::{StateRate, TakeHome, TaxResult};
pub use states::StateRateTable;
