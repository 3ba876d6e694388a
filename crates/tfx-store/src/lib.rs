//! # tfx-store — Record Storage
//!
//! The persistence seam of the trade-finance workflow.
//!
//! - [`RecordStore`] is the keyed store contract: create, get, replace,
//!   remove and per-kind enumeration.
//! - [`MemoryStore`] is a thread-safe in-memory implementation.
//! - [`WriteJournal`] tracks writes so a multi-record operation can be
//!   compensated.
//! - [`LcRegister`] layers LC revisioning (current pointer plus immutable
//!   history) on any store.
//!
//! ## Crate Policy
//!
//! - No operation here validates business content. Records arrive already
//!   validated.
//! - Status changes pass through `tfx-state` machines before any write.

pub mod error;
pub mod journal;
pub mod memory;
pub mod record;
pub mod revision;
pub mod store;

pub use error::StoreError;
pub use journal::{CompensationReport, JournalState, WriteEffect, WriteJournal};
pub use memory::MemoryStore;
pub use record::{
    Attachment, BusinessProcessRecord, ExportDocumentRecord, LcPointerRecord, LcRevisionRecord,
    PurchaseOrderIndex, PurchaseOrderRecord, RecordKey, RecordKind, StoredRecord,
    BUSINESS_PROCESS_STARTED,
};
pub use revision::{LcRegister, RegisterError, SUBMISSION_COMMENT};
pub use store::{Enumeration, RecordStore};
