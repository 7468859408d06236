//! Monte Carlo driver and move-count statistics.

pub mod driver;
pub mod stats;

pub use driver::{OutputFormat, SimError, Simulation};
pub use stats::{MoveStats, Summary};
