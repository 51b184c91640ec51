//! Command implementations.

pub mod analysis;
pub mod trials;

pub use self::analysis::execute_analysis;
pub use self::trials::execute_trials;
