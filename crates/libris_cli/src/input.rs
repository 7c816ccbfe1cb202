//! Raw input coercion for the coordinator.
//!
//! # Responsibility
//! - Turn raw prompt text into typed values.
//! - Describe coercion failures in user-facing terms.
//!
//! # Invariants
//! - Only integer coercion can fail; a failure aborts the triggering
//!   operation without mutating the catalog.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Coercion error for numeric prompt fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The field requires an integer and the raw text is not one.
    InvalidInteger { field: &'static str, raw: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInteger { field, raw } => {
                write!(f, "Error: {field} must be an integer, got `{raw}`.")
            }
        }
    }
}

impl Error for InputError {}

/// Parses a numeric prompt field, trimming surrounding whitespace first.
pub fn parse_integer<T: FromStr>(field: &'static str, raw: &str) -> Result<T, InputError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| InputError::InvalidInteger {
        field,
        raw: trimmed.to_string(),
    })
}
