//! # Error Types — Structured Error Hierarchy
//!
//! Defines the leaf error types of the trade-finance stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Date errors carry the offending input verbatim so the caller can
//!   report exactly which value failed to parse.
//! - Identifier errors name the identifier kind and the rejected input.
//! - `TfxError` is the umbrella type for callers that want one error for
//!   the whole stack; domain crates keep their own narrower enums.

use thiserror::Error;

/// Top-level error type for the trade-finance stack.
#[derive(Error, Debug)]
pub enum TfxError {
    /// A calendar date could not be parsed or shifted.
    #[error("date error: {0}")]
    Date(#[from] DateError),

    /// A business identifier was rejected at construction.
    #[error("identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// A wire literal did not name a known variant.
    #[error("unknown {kind}: {value:?}")]
    UnknownLiteral {
        /// The enum being parsed (e.g. "role", "document type").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Error raised while handling `MM/DD/YYYY` calendar dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input is not a valid `MM/DD/YYYY` calendar date.
    #[error("invalid date {value:?}: expected MM/DD/YYYY")]
    Malformed {
        /// The rejected input.
        value: String,
    },

    /// Adding days moved the date outside the representable range.
    #[error("date {date} plus {days} days is out of range")]
    Overflow {
        /// The starting date, rendered as `MM/DD/YYYY`.
        date: String,
        /// Days that were added.
        days: u32,
    },
}

/// Error raised when constructing a business identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier was empty or whitespace only.
    #[error("{kind} must not be empty")]
    Empty {
        /// Identifier kind.
        kind: &'static str,
    },

    /// The identifier could not be parsed.
    #[error("invalid {kind}: {value:?}")]
    Invalid {
        /// Identifier kind.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_date(value: &str) -> Result<(), TfxError> {
        let parsed: Result<(), DateError> = Err(DateError::Malformed { value: value.into() });
        parsed?;
        Ok(())
    }

    #[test]
    fn leaf_errors_convert_into_the_umbrella() {
        let err = parse_date("2020-01-01").unwrap_err();
        assert!(matches!(err, TfxError::Date(DateError::Malformed { .. })));
        assert_eq!(
            err.to_string(),
            "date error: invalid date \"2020-01-01\": expected MM/DD/YYYY"
        );

        let err = TfxError::from(IdentifierError::Empty { kind: "contract id" });
        assert_eq!(err.to_string(), "identifier error: contract id must not be empty");
    }

    #[test]
    fn unknown_literal_names_the_kind() {
        let err = TfxError::UnknownLiteral { kind: "role", value: "Auditor".into() };
        assert_eq!(err.to_string(), "unknown role: \"Auditor\"");
    }
}
