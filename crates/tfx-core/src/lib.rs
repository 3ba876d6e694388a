//! # tfx-core — Foundational Types for the Trade-Finance Stack
//!
//! This crate defines the primitives every other `tfx-*` crate speaks in.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for business keys.** `ContractId` and
//!    `PurchaseOrderId` are distinct types with validated constructors.
//!    A contract UID cannot be passed where a purchase-order id is expected.
//!
//! 2. **Closed role and document enums.** `Role`, `CompanyRole`,
//!    `DocumentType` and `DocumentFormat` parse from the wire literals used
//!    at the operation boundary and render back to them unchanged.
//!
//! 3. **Calendar dates, not timestamps, for trade terms.** `TradeDate` wraps
//!    a `chrono::NaiveDate` parsed from `MM/DD/YYYY`. A malformed date is a
//!    `DateError`, never a comparison result.
//!
//! 4. **UTC timestamps for audit.** `Timestamp` is used only for transition
//!    logs and audit events.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tfx-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()`, `.unwrap()` or `.expect()` outside tests.

pub mod document;
pub mod error;
pub mod identity;
pub mod party;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use document::{DocumentFormat, DocumentType};
pub use error::{DateError, IdentifierError, TfxError};
pub use identity::{ContractId, PurchaseOrderId};
pub use party::{CompanyRole, Role};
pub use temporal::{Timestamp, TradeDate, TRADE_DATE_FORMAT};
