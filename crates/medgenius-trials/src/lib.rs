//! MedGenius Clinical Trial Matching
//!
//! Connects patient profiles with ongoing clinical trials. The
//! registry is a built-in sample set (this is a demo product; there is
//! no live trials backend), filtered by condition, location, and
//! phase.

#![warn(missing_docs)]

mod registry;
mod trial;

pub use registry::{TrialQuery, TrialRegistry};
pub use trial::Trial;

use thiserror::Error;

/// Errors for trial search operations.
#[derive(Error, Debug)]
pub enum TrialError {
    /// A search needs at least one criterion.
    #[error("At least one search criterion is required")]
    EmptyQuery,
}
