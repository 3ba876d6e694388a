//! # tfx-state — Document Status Machines
//!
//! Every status change in the trade-finance stack goes through one of the
//! machines in this crate. A machine is a closed transition table: the
//! listed edges are the only legal moves, there are no wildcard or self
//! edges, and a state with no outgoing edge is terminal.
//!
//! ## State Machines
//!
//! - **Letter of credit** (`lc.rs`): issued by the importer's bank, reviewed
//!   by the exporter's bank, optionally resubmitted after rejection, and
//!   finally settled or defaulted.
//!
//! - **Export document** (`export_document.rs`): the Bill of Lading,
//!   Invoice and Packing List share one shape. They are submitted by the
//!   exporter's bank and accepted or rejected by the importer's bank.
//!
//! ## Design
//!
//! `StatusMachine::attempt_transition` is pure: it answers with the new
//! status or an `IllegalTransition` error and never touches storage.
//! Callers persist the returned status only after the edge is confirmed.

pub mod export_document;
pub mod lc;
pub mod machine;

// ─── Machine re-exports ─────────────────────────────────────────────

pub use machine::{StatusMachine, TransitionError};

// ─── Letter of credit re-exports ────────────────────────────────────

pub use lc::{LcMachine, LcStatus, LcTransitionRecord};

// ─── Export document re-exports ─────────────────────────────────────

pub use export_document::{ExportDocumentMachine, ExportDocumentStatus};
