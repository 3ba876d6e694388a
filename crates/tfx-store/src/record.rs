//! # Persisted Records
//!
//! Every record the workflow persists is one variant of [`StoredRecord`].
//! A record knows its own [`RecordKey`], so `create` and `replace` take the
//! record alone and the key can never disagree with the content.
//!
//! ## Key layout
//!
//! | Kind | Type tag | Id | Revision |
//! |------|----------|----|----------|
//! | Business process | `BP` | contract UID | - |
//! | LC current pointer | `LC` | contract UID | - |
//! | LC history entry | `LC_REVISION` | contract UID | `n` |
//! | Bill of lading | `BL` | contract UID | - |
//! | Invoice | `INVOICE` | contract UID | - |
//! | Packing list | `PACKINGLIST` | contract UID | - |
//! | Purchase order | `PO` | numeric id | - |
//! | Purchase order index | `ALL_PO` | `ALL_PO` | - |

use serde::{Deserialize, Serialize};

use tfx_core::{CompanyRole, ContractId, DocumentType, PurchaseOrderId, Role, Timestamp};
use tfx_documents::{ExportDocument, LcTerms, PurchaseOrder};
use tfx_state::{ExportDocumentStatus, LcStatus, LcTransitionRecord};

use crate::error::StoreError;

// ─── Keys ────────────────────────────────────────────────────────────

/// Type discriminator shared by all records of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    BusinessProcess,
    LcPointer,
    LcRevision,
    BillOfLading,
    Invoice,
    PackingList,
    PurchaseOrder,
    PurchaseOrderIndex,
}

impl RecordKind {
    /// The record kind holding documents of `doc_type`.
    pub fn for_document(doc_type: DocumentType) -> Self {
        match doc_type {
            DocumentType::BillOfLading => Self::BillOfLading,
            DocumentType::Invoice => Self::Invoice,
            DocumentType::PackingList => Self::PackingList,
        }
    }

    /// Return the type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessProcess => "BP",
            Self::LcPointer => "LC",
            Self::LcRevision => "LC_REVISION",
            Self::BillOfLading => "BL",
            Self::Invoice => "INVOICE",
            Self::PackingList => "PACKINGLIST",
            Self::PurchaseOrder => "PO",
            Self::PurchaseOrderIndex => "ALL_PO",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key `(kind, id[, revision])`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub kind: RecordKind,
    pub id: String,
    pub revision: Option<u32>,
}

impl RecordKey {
    pub fn business_process(uid: &ContractId) -> Self {
        Self::plain(RecordKind::BusinessProcess, uid.as_str())
    }

    pub fn lc_pointer(uid: &ContractId) -> Self {
        Self::plain(RecordKind::LcPointer, uid.as_str())
    }

    pub fn lc_revision(uid: &ContractId, revision: u32) -> Self {
        Self {
            kind: RecordKind::LcRevision,
            id: uid.as_str().to_string(),
            revision: Some(revision),
        }
    }

    pub fn document(doc_type: DocumentType, uid: &ContractId) -> Self {
        Self::plain(RecordKind::for_document(doc_type), uid.as_str())
    }

    pub fn purchase_order(id: PurchaseOrderId) -> Self {
        Self::plain(RecordKind::PurchaseOrder, &id.to_string())
    }

    pub fn purchase_order_index() -> Self {
        Self::plain(RecordKind::PurchaseOrderIndex, RecordKind::PurchaseOrderIndex.as_str())
    }

    fn plain(kind: RecordKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            revision: None,
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.revision {
            Some(rev) => write!(f, "{}:{}#{}", self.kind, self.id, rev),
            None => write!(f, "{}:{}", self.kind, self.id),
        }
    }
}

// ─── Attachments ─────────────────────────────────────────────────────

/// Opaque attachment bytes (typically a PDF), stored and returned unexamined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attachment(pub Vec<u8>);

impl Attachment {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Attachment {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

// ─── Record types ────────────────────────────────────────────────────

/// Status seeded into every new business-process record.
pub const BUSINESS_PROCESS_STARTED: &str = "STARTED";

/// Placeholder certificate stored until identity material is bound.
pub const PLACEHOLDER_CERT: &str = "";

/// One trade-finance contract and its parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProcessRecord {
    #[serde(rename = "UID")]
    pub uid: ContractId,
    pub status: String,
    pub importer_name: String,
    pub exporter_name: String,
    pub importer_bank_name: String,
    pub exporter_bank_name: String,
    pub importer_cert: String,
    pub exporter_cert: String,
    pub importer_bank_cert: String,
    pub exporter_bank_cert: String,
    pub shipping_company: String,
    pub insurance_company: String,
}

impl BusinessProcessRecord {
    /// A new record with placeholder certificates and no carrier or insurer.
    pub fn started(
        uid: ContractId,
        importer_name: &str,
        exporter_name: &str,
        importer_bank_name: &str,
        exporter_bank_name: &str,
    ) -> Self {
        Self {
            uid,
            status: BUSINESS_PROCESS_STARTED.to_string(),
            importer_name: importer_name.to_string(),
            exporter_name: exporter_name.to_string(),
            importer_bank_name: importer_bank_name.to_string(),
            exporter_bank_name: exporter_bank_name.to_string(),
            importer_cert: PLACEHOLDER_CERT.to_string(),
            exporter_cert: PLACEHOLDER_CERT.to_string(),
            importer_bank_cert: PLACEHOLDER_CERT.to_string(),
            exporter_bank_cert: PLACEHOLDER_CERT.to_string(),
            shipping_company: String::new(),
            insurance_company: String::new(),
        }
    }

    /// Name of the party holding `role`.
    pub fn party_name(&self, role: Role) -> &str {
        match role {
            Role::Importer => &self.importer_name,
            Role::Exporter => &self.exporter_name,
            Role::ImporterBank => &self.importer_bank_name,
            Role::ExporterBank => &self.exporter_bank_name,
        }
    }

    /// Name of the company holding `role`, including carrier and insurer.
    pub fn company_name(&self, role: CompanyRole) -> &str {
        match role {
            CompanyRole::Importer => &self.importer_name,
            CompanyRole::Exporter => &self.exporter_name,
            CompanyRole::ImporterBank => &self.importer_bank_name,
            CompanyRole::ExporterBank => &self.exporter_bank_name,
            CompanyRole::ShippingCompany => &self.shipping_company,
            CompanyRole::InsuranceCompany => &self.insurance_company,
        }
    }
}

/// The current state of an LC: newest content plus live status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcPointerRecord {
    pub uid: ContractId,
    /// Highest revision in the history.
    pub latest_revision: u32,
    pub terms: LcTerms,
    pub attachment: Attachment,
    pub status: LcStatus,
    /// Comment stored with the latest status change.
    pub comment: String,
    /// Every status change since submission, oldest first.
    pub transitions: Vec<LcTransitionRecord>,
}

/// An immutable historical copy of LC content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcRevisionRecord {
    pub uid: ContractId,
    pub revision: u32,
    pub terms: LcTerms,
    pub attachment: Attachment,
    pub comment: String,
    pub recorded_at: Timestamp,
}

/// A presented export document and its review status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocumentRecord {
    pub uid: ContractId,
    pub document: ExportDocument,
    pub attachment: Attachment,
    pub status: ExportDocumentStatus,
}

/// A purchase order with its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrderRecord {
    pub id: PurchaseOrderId,
    pub order: PurchaseOrder,
}

/// Append-only list of every purchase order id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrderIndex {
    pub ids: Vec<PurchaseOrderId>,
}

// ─── Tagged union ────────────────────────────────────────────────────

/// Any persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoredRecord {
    #[serde(rename = "BP")]
    BusinessProcess(BusinessProcessRecord),
    #[serde(rename = "LC")]
    LcPointer(LcPointerRecord),
    #[serde(rename = "LC_REVISION")]
    LcRevision(LcRevisionRecord),
    #[serde(rename = "DOCUMENT")]
    ExportDocument(ExportDocumentRecord),
    #[serde(rename = "PO")]
    PurchaseOrder(PurchaseOrderRecord),
    #[serde(rename = "ALL_PO")]
    PurchaseOrderIndex(PurchaseOrderIndex),
}

impl StoredRecord {
    /// The key this record is stored under.
    pub fn key(&self) -> RecordKey {
        match self {
            Self::BusinessProcess(r) => RecordKey::business_process(&r.uid),
            Self::LcPointer(r) => RecordKey::lc_pointer(&r.uid),
            Self::LcRevision(r) => RecordKey::lc_revision(&r.uid, r.revision),
            Self::ExportDocument(r) => RecordKey::document(r.document.document_type(), &r.uid),
            Self::PurchaseOrder(r) => RecordKey::purchase_order(r.id),
            Self::PurchaseOrderIndex(_) => RecordKey::purchase_order_index(),
        }
    }

    /// The record kind.
    pub fn kind(&self) -> RecordKind {
        self.key().kind
    }

    pub fn into_business_process(self) -> Result<BusinessProcessRecord, StoreError> {
        match self {
            Self::BusinessProcess(r) => Ok(r),
            other => Err(other.mismatch(RecordKind::BusinessProcess.as_str())),
        }
    }

    pub fn into_lc_pointer(self) -> Result<LcPointerRecord, StoreError> {
        match self {
            Self::LcPointer(r) => Ok(r),
            other => Err(other.mismatch(RecordKind::LcPointer.as_str())),
        }
    }

    pub fn into_lc_revision(self) -> Result<LcRevisionRecord, StoreError> {
        match self {
            Self::LcRevision(r) => Ok(r),
            other => Err(other.mismatch(RecordKind::LcRevision.as_str())),
        }
    }

    pub fn into_export_document(self) -> Result<ExportDocumentRecord, StoreError> {
        match self {
            Self::ExportDocument(r) => Ok(r),
            other => Err(other.mismatch("DOCUMENT")),
        }
    }

    pub fn into_purchase_order(self) -> Result<PurchaseOrderRecord, StoreError> {
        match self {
            Self::PurchaseOrder(r) => Ok(r),
            other => Err(other.mismatch(RecordKind::PurchaseOrder.as_str())),
        }
    }

    pub fn into_purchase_order_index(self) -> Result<PurchaseOrderIndex, StoreError> {
        match self {
            Self::PurchaseOrderIndex(r) => Ok(r),
            other => Err(other.mismatch(RecordKind::PurchaseOrderIndex.as_str())),
        }
    }

    fn mismatch(&self, expected: &'static str) -> StoreError {
        StoreError::KindMismatch {
            key: self.key().to_string(),
            expected,
            found: self.kind().as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid() -> ContractId {
        ContractId::new("C-1").unwrap()
    }

    #[test]
    fn keys_render_kind_and_revision() {
        assert_eq!(RecordKey::business_process(&uid()).to_string(), "BP:C-1");
        assert_eq!(RecordKey::lc_revision(&uid(), 3).to_string(), "LC_REVISION:C-1#3");
        assert_eq!(
            RecordKey::document(DocumentType::PackingList, &uid()).to_string(),
            "PACKINGLIST:C-1"
        );
        assert_eq!(RecordKey::purchase_order_index().to_string(), "ALL_PO:ALL_PO");
    }

    #[test]
    fn business_process_starts_with_placeholders() {
        let bp = BusinessProcessRecord::started(uid(), "Imp", "Exp", "IB", "EB");
        assert_eq!(bp.status, "STARTED");
        assert_eq!(bp.party_name(Role::ExporterBank), "EB");
        assert_eq!(bp.company_name(CompanyRole::ShippingCompany), "");
        let json = serde_json::to_value(&bp).unwrap();
        assert_eq!(json["UID"], "C-1");
        assert_eq!(json["importerBankName"], "IB");
    }

    #[test]
    fn record_key_follows_content() {
        let rec = StoredRecord::BusinessProcess(BusinessProcessRecord::started(
            uid(),
            "a",
            "b",
            "c",
            "d",
        ));
        assert_eq!(rec.key(), RecordKey::business_process(&uid()));
        assert!(rec.clone().into_business_process().is_ok());
        assert!(matches!(
            rec.into_lc_pointer(),
            Err(StoreError::KindMismatch { expected: "LC", found: "BP", .. })
        ));
    }

    #[test]
    fn stored_record_is_tagged() {
        let rec = StoredRecord::PurchaseOrderIndex(PurchaseOrderIndex {
            ids: vec![PurchaseOrderId(1)],
        });
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "ALL_PO");
        assert_eq!(json["ids"][0], 1);
    }
}
