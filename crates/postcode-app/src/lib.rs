//! Use case orchestration for postcode.
//!
//! This crate provides the application layer: use cases that coordinate the settings and domain
//! layers and turn their answers into reports. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod check;
mod render;

pub use catalog::{CountrySummary, run_countries, run_formats, run_has_country};
pub use check::{CheckEntry, CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use render::{render_countries, render_text, serialize_report};
