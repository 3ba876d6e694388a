//! # Status Machine Contract
//!
//! A status machine is described by its initial status and a successor
//! table. Everything else (terminality, transition checks) is derived from
//! the table so the two can never disagree.

use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors raised by status machines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested edge is not in the machine's table.
    #[error("illegal {machine} transition: {from} -> {to}")]
    IllegalTransition {
        /// Machine that rejected the edge.
        machine: &'static str,
        /// Current status.
        from: String,
        /// Requested status.
        to: String,
    },

    /// A status literal did not name a state of the machine.
    #[error("unknown {machine} status {value:?}")]
    UnknownStatus {
        /// Machine the literal was parsed for.
        machine: &'static str,
        /// The rejected literal.
        value: String,
    },
}

// ─── Machine trait ───────────────────────────────────────────────────

/// A closed, declarative transition table.
pub trait StatusMachine {
    /// The status type governed by this machine.
    type Status: Copy + Eq + std::fmt::Display + 'static;

    /// Human-readable machine name used in errors.
    const NAME: &'static str;

    /// Status assigned on creation.
    fn initial() -> Self::Status;

    /// Legal successors of `from`. Empty for terminal states.
    fn successors(from: Self::Status) -> &'static [Self::Status];

    /// Whether `status` has no outgoing edges.
    fn is_terminal(status: Self::Status) -> bool {
        Self::successors(status).is_empty()
    }

    /// Check whether `current -> requested` is a listed edge.
    fn permits(current: Self::Status, requested: Self::Status) -> bool {
        Self::successors(current).contains(&requested)
    }

    /// Return `requested` if the edge exists, otherwise `IllegalTransition`.
    fn attempt_transition(
        current: Self::Status,
        requested: Self::Status,
    ) -> Result<Self::Status, TransitionError> {
        if Self::permits(current, requested) {
            Ok(requested)
        } else {
            Err(TransitionError::IllegalTransition {
                machine: Self::NAME,
                from: current.to_string(),
                to: requested.to_string(),
            })
        }
    }
}
