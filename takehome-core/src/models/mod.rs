mod state_rate;
mod tax_result;

pub use state_rate::StateRate;
pub use tax_result::{TakeHome, TaxResult};
