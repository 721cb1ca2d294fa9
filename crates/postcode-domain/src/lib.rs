//! Pure postal code format matching (no IO).
//!
//! Input: a country code and a candidate postal code.
//! Output: whether any of the country's accepted formats matches the whole code.

#![forbid(unsafe_code)]

pub mod error;
pub mod pattern;
pub mod table;
pub mod validator;

mod data;

#[cfg(test)]
mod proptest;

pub use error::{TableError, ValidationError};
pub use pattern::{MatchOptions, Pattern, Token};
pub use table::FormatTable;
pub use validator::Validator;
