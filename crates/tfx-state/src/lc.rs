//! # Letter of Credit Lifecycle
//!
//! Models the review and settlement of an LC between the importer's bank
//! (IB), which issues it, and the exporter's bank (EB), which reviews it and
//! is eventually paid under it.
//!
//! ## States
//!
//! ```text
//! SUBMITTED_BY_IB ──────▶ ACCEPTED_BY_EB ──▶ PAYMENT_DUE_FROM_IB_TO_EB ──▶ PAYMENT_RECEIVED (terminal)
//!    │   │                      ▲                   ▲          │
//!    │   └──────────────────────┼───────────────────┘          └──▶ PAYMENT_DEFAULTED (terminal)
//!    ▼                          │
//! REJECTED_BY_EB ◀──────┐       │
//!    │                  │       │
//!    ▼                  │       │
//! RESUBMITTED_BY_IB ────┴───────┘
//! ```
//!
//! A resubmitted LC goes back under review: the exporter's bank either
//! accepts it or rejects it again. It never moves straight to payment.
//!
//! `SUBMITTED_BY_IB` may move straight to `PAYMENT_DUE_FROM_IB_TO_EB` for
//! sight credits, where presentation of compliant documents makes payment
//! due without a separate acceptance step.

use serde::{Deserialize, Serialize};

use tfx_core::Timestamp;

use crate::machine::{StatusMachine, TransitionError};

// ─── LC Status ───────────────────────────────────────────────────────

/// The lifecycle status of a letter of credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LcStatus {
    /// Issued by the importer's bank, awaiting review.
    SubmittedByIb,
    /// Accepted by the exporter's bank.
    AcceptedByEb,
    /// Rejected by the exporter's bank; may be resubmitted.
    RejectedByEb,
    /// Amended and resubmitted by the importer's bank.
    ResubmittedByIb,
    /// The importer's bank owes payment to the exporter's bank.
    PaymentDueFromIbToEb,
    /// Payment settled (terminal).
    PaymentReceived,
    /// Payment defaulted (terminal).
    PaymentDefaulted,
}

impl LcStatus {
    /// Every LC status.
    pub const ALL: [LcStatus; 7] = [
        LcStatus::SubmittedByIb,
        LcStatus::AcceptedByEb,
        LcStatus::RejectedByEb,
        LcStatus::ResubmittedByIb,
        LcStatus::PaymentDueFromIbToEb,
        LcStatus::PaymentReceived,
        LcStatus::PaymentDefaulted,
    ];

    /// Return the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubmittedByIb => "SUBMITTED_BY_IB",
            Self::AcceptedByEb => "ACCEPTED_BY_EB",
            Self::RejectedByEb => "REJECTED_BY_EB",
            Self::ResubmittedByIb => "RESUBMITTED_BY_IB",
            Self::PaymentDueFromIbToEb => "PAYMENT_DUE_FROM_IB_TO_EB",
            Self::PaymentReceived => "PAYMENT_RECEIVED",
            Self::PaymentDefaulted => "PAYMENT_DEFAULTED",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        LcMachine::is_terminal(*self)
    }
}

impl std::fmt::Display for LcStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LcStatus {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LcStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| TransitionError::UnknownStatus {
                machine: LcMachine::NAME,
                value: s.to_string(),
            })
    }
}

// ─── Machine ─────────────────────────────────────────────────────────

/// Transition table for letters of credit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcMachine;

impl StatusMachine for LcMachine {
    type Status = LcStatus;

    const NAME: &'static str = "letter of credit";

    fn initial() -> LcStatus {
        LcStatus::SubmittedByIb
    }

    fn successors(from: LcStatus) -> &'static [LcStatus] {
        use LcStatus::*;
        match from {
            SubmittedByIb => &[AcceptedByEb, RejectedByEb, PaymentDueFromIbToEb],
            RejectedByEb => &[ResubmittedByIb],
            ResubmittedByIb => &[AcceptedByEb, RejectedByEb],
            AcceptedByEb => &[PaymentDueFromIbToEb],
            PaymentDueFromIbToEb => &[PaymentReceived, PaymentDefaulted],
            PaymentReceived | PaymentDefaulted => &[],
        }
    }
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of an LC status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcTransitionRecord {
    /// Status before the transition.
    pub from_status: LcStatus,
    /// Status after the transition.
    pub to_status: LcStatus,
    /// When the transition was applied.
    pub timestamp: Timestamp,
    /// Comment stored alongside the new status.
    pub comment: String,
}

impl LcTransitionRecord {
    /// Record a transition that happened now.
    pub fn now(from_status: LcStatus, to_status: LcStatus, comment: &str) -> Self {
        Self {
            from_status,
            to_status,
            timestamp: Timestamp::now(),
            comment: comment.to_string(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
