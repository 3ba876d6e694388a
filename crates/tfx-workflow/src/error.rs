//! # Workflow Errors and Outcomes
//!
//! Two failure channels:
//!
//! - **Validation** failures are recovered locally. The operation returns
//!   `Ok(OperationOutcome::Rejected(report))` and nothing is written.
//! - **Request** failures abort the call with a [`WorkflowError`]. Any writes
//!   the call made have been compensated before the error is returned.

use thiserror::Error;

use tfx_core::{IdentifierError, Role, TfxError};
use tfx_documents::ValidationReport;
use tfx_state::TransitionError;
use tfx_store::{RegisterError, StoreError};

use crate::auth::AuthError;

/// A request-level failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The status machine has no such edge.
    #[error("illegal {machine} transition: {from} -> {to}")]
    IllegalTransition {
        machine: &'static str,
        from: String,
        to: String,
    },

    /// A record the operation depends on does not exist.
    #[error("{key} not found")]
    NotFound { key: String },

    /// `create` targeted a key that is already taken.
    #[error("{key} already exists")]
    AlreadyExists { key: String },

    /// The caller does not hold the role the operation requires.
    #[error("Access Denied to {action}: caller is not {role} on {contract}")]
    Unauthorized {
        contract: String,
        role: Role,
        action: &'static str,
    },

    /// The caller holds no role on the contract.
    #[error("Access Denied to {action}: caller is not a participant in {contract}")]
    NotParticipant {
        contract: String,
        action: &'static str,
    },

    /// Only an importer may raise a purchase order.
    #[error("Access Denied to create a PO")]
    PurchaseOrderDenied { role: String },

    /// The operation is legal in general but not in the current state.
    #[error("{0}")]
    PreconditionFailed(String),

    /// An argument did not parse.
    #[error("{0}")]
    InvalidArgument(String),

    /// The store failed for a reason other than presence or absence.
    #[error(transparent)]
    Store(StoreError),

    /// The identity backend failed.
    #[error(transparent)]
    Authorization(#[from] AuthError),

    /// Rollback after a failure did not complete.
    #[error("{operation} failed ({cause}) and compensation left {} record(s) inconsistent: {}", .inconsistent.len(), .inconsistent.join(", "))]
    CompensationFailed {
        operation: &'static str,
        cause: Box<WorkflowError>,
        inconsistent: Vec<String>,
    },
}

impl WorkflowError {
    pub fn not_found(key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }
}

impl From<StoreError> for WorkflowError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { key } => Self::AlreadyExists { key },
            StoreError::NotFound { key } => Self::NotFound { key },
            other => Self::Store(other),
        }
    }
}

impl From<TransitionError> for WorkflowError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::IllegalTransition { machine, from, to } => {
                Self::IllegalTransition { machine, from, to }
            }
            other @ TransitionError::UnknownStatus { .. } => Self::InvalidArgument(other.to_string()),
        }
    }
}

impl From<RegisterError> for WorkflowError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::Store(e) => e.into(),
            RegisterError::Transition(e) => e.into(),
        }
    }
}

impl From<IdentifierError> for WorkflowError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<TfxError> for WorkflowError {
    fn from(err: TfxError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<serde_json::Error> for WorkflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

/// Result of a mutating operation that reached a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Every write was made.
    Applied,
    /// Validation failed. Nothing was written.
    Rejected(ValidationReport),
}

impl OperationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The rejection report, if any.
    pub fn rejection(&self) -> Option<&ValidationReport> {
        match self {
            Self::Rejected(report) => Some(report),
            Self::Applied => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_presence_errors_are_lifted() {
        let err: WorkflowError = StoreError::AlreadyExists { key: "BP:C-1".into() }.into();
        assert_eq!(err, WorkflowError::AlreadyExists { key: "BP:C-1".into() });
        let err: WorkflowError = StoreError::Unavailable("down".into()).into();
        assert!(matches!(err, WorkflowError::Store(_)));
    }

    #[test]
    fn transition_errors_keep_their_edge() {
        let err: WorkflowError = TransitionError::IllegalTransition {
            machine: "letter of credit",
            from: "ACCEPTED_BY_EB".into(),
            to: "ACCEPTED_BY_EB".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "illegal letter of credit transition: ACCEPTED_BY_EB -> ACCEPTED_BY_EB"
        );
    }

    #[test]
    fn compensation_failure_lists_keys() {
        let err = WorkflowError::CompensationFailed {
            operation: "accept_ed",
            cause: Box::new(WorkflowError::Store(StoreError::Unavailable("disk".into()))),
            inconsistent: vec!["BL:C-1".into(), "INVOICE:C-1".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 record(s)"));
        assert!(msg.contains("BL:C-1, INVOICE:C-1"));
    }

    #[test]
    fn purchase_order_denial_message() {
        let err = WorkflowError::PurchaseOrderDenied {
            role: "Exporter".into(),
        };
        assert_eq!(err.to_string(), "Access Denied to create a PO");
    }
}
