//! Stable DTOs and IDs used across the postcode workspace.
//!
//! This crate is intentionally boring:
//! - the `FormatSpec` template type and its placeholder alphabet
//! - data types for the emitted check report
//! - stable string IDs

#![forbid(unsafe_code)]

pub mod format;
pub mod ids;
pub mod receipt;

pub use format::{FormatSpec, Placeholder};
pub use receipt::{
    CheckReport, CheckResult, CheckStatus, Counts, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
