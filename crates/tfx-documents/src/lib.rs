//! # tfx-documents — LC Terms and Export-Document Validation
//!
//! Parses letter-of-credit terms and validates the three export documents
//! presented under them.
//!
//! - **LC terms** (`lc_terms.rs`): the 28 mandatory MT700-style tags and the
//!   parsers that pull amount, currency, tolerance, presentation period and
//!   dates out of them.
//! - **Validators** (`bill_of_lading.rs`, `invoice.rs`, `packing_list.rs`):
//!   typed payloads implementing [`DocumentValidator`].
//! - **Rules** (`rules.rs`): the numbered cross-validation rules shared by
//!   the validators.
//! - **Purchase orders** (`purchase_order.rs`): the unvalidated PO payload.
//! - **Outcomes** (`outcome.rs`): [`ValidationFailure`] and the
//!   `{"result": ...}` report shown to the submitting party.
//!
//! Validation is pure. Nothing here touches storage or status.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests. `.expect()` is allowed
//!   only when compiling constant regex patterns.

pub mod bill_of_lading;
pub mod document;
pub mod invoice;
pub mod lc_terms;
pub mod outcome;
pub mod packing_list;
pub mod purchase_order;
pub mod rules;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bill_of_lading::{BillOfLading, BillOfLadingRow};
pub use document::{cross_check_lc_numbers, is_present, DocumentValidator, ExportDocument};
pub use invoice::{Invoice, InvoiceRow};
pub use lc_terms::{
    parse_amount_currency, parse_period_days, parse_tolerance_percent, CreditAmount, LcTerms,
};
pub use outcome::{ValidationFailure, ValidationReport, DOCUMENT_SUCCESS, LC_SUCCESS};
pub use packing_list::{PackingList, PackingListRow};
pub use purchase_order::PurchaseOrder;
