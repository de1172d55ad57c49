//! Report generation for benchmark results
//!
//! This crate renders a finished [`mb_core::Summary`] as:
//!
//! - The plain-text report printed after a run
//! - A JSON report, printed or written to disk

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;
pub mod text;

pub use json::{JsonReport, ReportError};
pub use text::render_text;
