//! Input processing logic.
//!
//! This module ties parsing and calculation together:
//! - [`run`] - per-input reports and the run loop over the configured inputs

mod run;

// Re-export public functions
pub use run::{explain_input, process_input, run, InputReport, SubnetReport};
