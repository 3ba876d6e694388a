//! # Validation Outcomes
//!
//! Validation never aborts a request. A failed check is a
//! [`ValidationFailure`], which is rendered into a [`ValidationReport`]
//! carrying the `"Error: ..."` text shown to the submitting party. A
//! passing check renders the matching `"Success: ..."` text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result text for a letter of credit that passed every check.
pub const LC_SUCCESS: &str = "Success: The L/C passed all validation rules.";

/// Result text for an export document that passed every check.
pub const DOCUMENT_SUCCESS: &str = "Success: All validation checks passed";

/// The first failed check of a validation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// A mandatory field is empty, absent, or (for numbers) negative.
    #[error("{0} field is not set.")]
    MissingField(&'static str),

    /// A date field is not a valid `MM/DD/YYYY` date.
    #[error("{field} is not a valid MM/DD/YYYY date: {value:?}")]
    MalformedDate {
        /// Field or tag holding the date.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An LC tag does not contain the structure its rule needs.
    #[error("{0} could not be parsed")]
    MalformedTag(&'static str),

    /// The LC tolerance is not an integer percentage.
    #[error("Tolerance value provided in L/C is not an integer between 0 and 100: {0:?}")]
    ToleranceOutOfRange(String),

    /// A declared or invoiced value falls outside the tolerance band.
    #[error(
        "{field} {value} is not within tolerance limit specified in L/C ({amount} +/- {tolerance_percent}%)"
    )]
    ValueOutOfTolerance {
        /// Field holding the value.
        field: &'static str,
        /// Declared value.
        value: i64,
        /// LC amount.
        amount: u64,
        /// Tolerance percentage from the LC.
        tolerance_percent: u8,
    },

    /// Document currency differs from the LC currency.
    #[error("Currency in {document} data does not match currency in L/C ({found} != {expected})")]
    CurrencyMismatch {
        /// Document kind.
        document: &'static str,
        /// Currency on the document.
        found: String,
        /// Currency on the LC.
        expected: String,
    },

    /// Document LC number differs from the LC credit number.
    #[error("LC number in {document} does not match the number on LC ({found:?} != {expected:?})")]
    LcNumberMismatch {
        /// Document kind.
        document: &'static str,
        /// LC number on the document.
        found: String,
        /// Expected credit number.
        expected: String,
    },

    /// A document date precedes the LC issue date.
    #[error("{field} {date} cannot be earlier than the L/C issue date {credit_issued}")]
    IssuedBeforeCredit {
        /// Field holding the date.
        field: &'static str,
        /// Document date.
        date: String,
        /// LC issue date.
        credit_issued: String,
    },

    /// A shipment or packing date is after the LC's latest shipment date.
    #[error("{field} {date} cannot be later than the latest date of shipment {latest} as per L/C")]
    ShippedAfterDeadline {
        /// Field holding the date.
        field: &'static str,
        /// Document date.
        date: String,
        /// Latest shipment date on the LC.
        latest: String,
    },

    /// Documents were presented more than 21 days after shipment.
    #[error("Presentation date {presented} cannot be later than shipping date {shipped} + 21 days")]
    PresentationWindowExceeded {
        /// Presentation date.
        presented: String,
        /// Shipment date.
        shipped: String,
    },

    /// The invoice is due before the presentation period has run.
    #[error(
        "Invoice date {issued} + period of presentation ({period_days} days) as per L/C cannot be later than due date {due}"
    )]
    DueDateBeforePresentationPeriod {
        /// Invoice date.
        issued: String,
        /// Presentation period in days.
        period_days: u32,
        /// Invoice due date.
        due: String,
    },

    /// The payload is not valid JSON for its document kind.
    #[error("{document} payload could not be read: {reason}")]
    MalformedPayload {
        /// Document kind.
        document: &'static str,
        /// Deserializer message.
        reason: String,
    },
}

/// User-facing rendering of a validation run: `{"result": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub result: String,
}

impl ValidationReport {
    /// A passing report with the given success text.
    pub fn passed(success: &str) -> Self {
        Self {
            result: success.to_string(),
        }
    }

    /// A failing report for `failure`.
    pub fn failed(failure: &ValidationFailure) -> Self {
        Self {
            result: format!("Error: {failure}"),
        }
    }

    /// Render a validation result with the given success text.
    pub fn from_result(result: &Result<(), ValidationFailure>, success: &str) -> Self {
        match result {
            Ok(()) => Self::passed(success),
            Err(failure) => Self::failed(failure),
        }
    }

    /// Whether the run passed.
    pub fn is_success(&self) -> bool {
        self.result.starts_with("Success")
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.result)
    }
}
