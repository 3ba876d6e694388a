//! # tfx-workflow — Letter-of-Credit Workflow
//!
//! Orchestrates the trade-finance business process over a pluggable
//! record store:
//!
//! ```text
//!   Importer Bank                 Exporter Bank                Importer Bank
//!   ─────────────                 ─────────────                ─────────────
//!   submit_lc ─────▶ SUBMITTED_BY_IB ─▶ accept_lc / reject_lc
//!   resubmit_lc ◀── REJECTED_BY_EB
//!                                 submit_ed (BL, Invoice, PL) ─▶ accept_ed / reject_ed
//!   accept_to_pay ─▶ PAYMENT_DUE_FROM_IB_TO_EB ─▶ payment_received / defaulted_on_payment
//! ```
//!
//! - [`TradeFinanceWorkflow`] (`workflow.rs`): LC and export-document
//!   operations.
//! - `reporting.rs`: derived contract status and listings.
//! - `purchase_order.rs`: purchase-order records.
//! - [`Saga`] (`saga.rs`): all-or-nothing multi-record writes.
//! - Ports: [`AuthorizationPort`] for caller roles, [`AuditSink`] for the
//!   event log.
//! - [`WorkflowConfig`]: authorization and LC-advance switches.

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod purchase_order;
pub mod reporting;
pub mod saga;
pub mod telemetry;
pub mod workflow;

pub use audit::{AuditSink, MemoryAuditSink, TracingAuditSink, WorkflowEvent};
pub use auth::{AllowAll, AuthError, AuthorizationPort, StaticParticipants};
pub use config::{ConfigError, WorkflowConfig};
pub use error::{OperationOutcome, WorkflowError};
pub use purchase_order::PurchaseOrderEntry;
pub use reporting::{ContractCount, ContractSummary, ContractsList, Participant};
pub use saga::Saga;
pub use workflow::{DocumentContent, TradeFinanceWorkflow};
