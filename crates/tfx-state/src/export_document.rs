//! # Export Document Review
//!
//! The Bill of Lading, Commercial Invoice and Packing List share one
//! machine:
//!
//! ```text
//! SUBMITTED_BY_EB ──▶ ACCEPTED_BY_IB (terminal)
//!        │
//!        └──────────▶ REJECTED_BY_IB (terminal)
//! ```

use serde::{Deserialize, Serialize};

use crate::machine::{StatusMachine, TransitionError};

/// Review status of an export document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportDocumentStatus {
    /// Presented by the exporter's bank.
    SubmittedByEb,
    /// Accepted by the importer's bank (terminal).
    AcceptedByIb,
    /// Rejected by the importer's bank (terminal).
    RejectedByIb,
}

impl ExportDocumentStatus {
    /// Every export-document status.
    pub const ALL: [ExportDocumentStatus; 3] = [
        ExportDocumentStatus::SubmittedByEb,
        ExportDocumentStatus::AcceptedByIb,
        ExportDocumentStatus::RejectedByIb,
    ];

    /// Return the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubmittedByEb => "SUBMITTED_BY_EB",
            Self::AcceptedByIb => "ACCEPTED_BY_IB",
            Self::RejectedByIb => "REJECTED_BY_IB",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        ExportDocumentMachine::is_terminal(*self)
    }
}

impl std::fmt::Display for ExportDocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExportDocumentStatus {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportDocumentStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| TransitionError::UnknownStatus {
                machine: ExportDocumentMachine::NAME,
                value: s.to_string(),
            })
    }
}

/// Transition table for export documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportDocumentMachine;

impl StatusMachine for ExportDocumentMachine {
    type Status = ExportDocumentStatus;

    const NAME: &'static str = "export document";

    fn initial() -> ExportDocumentStatus {
        ExportDocumentStatus::SubmittedByEb
    }

    fn successors(from: ExportDocumentStatus) -> &'static [ExportDocumentStatus] {
        use ExportDocumentStatus::*;
        match from {
            SubmittedByEb => &[AcceptedByIb, RejectedByIb],
            AcceptedByIb | RejectedByIb => &[],
        }
    }
}
