//! Output formatting for subnet reports.
//!
//! This module handles formatting reports for the operator:
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::reports_to_json;
pub use terminal::{
    format_label, render_explanation, render_failure, render_header, render_reports,
    render_summary,
};
