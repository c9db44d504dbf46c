pub mod errors;
pub mod hero;

pub use errors::{ApplicationError, Result};
pub use hero::HeroPowerStat;
