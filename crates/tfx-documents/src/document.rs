//! # Document Validation Contract
//!
//! Every export document runs the same two phases:
//!
//! 1. **Required fields.** Numeric fields must be present and non-negative,
//!    text fields non-empty, and the row list non-empty. Fields are checked
//!    in a fixed order per document kind and the first failure is reported.
//! 2. **Cross-validation.** The numbered rules in [`crate::rules`] that
//!    apply to the document kind, in ascending order.
//!
//! [`ExportDocument`] is the tagged union stored by the workflow. JSON is
//! decoded into it once at the boundary; everything after that works on the
//! typed payload.

use serde::{Deserialize, Serialize};

use tfx_core::DocumentType;

use crate::bill_of_lading::BillOfLading;
use crate::invoice::Invoice;
use crate::lc_terms::LcTerms;
use crate::outcome::ValidationFailure;
use crate::packing_list::PackingList;

/// Two-phase validation of one export document kind.
pub trait DocumentValidator {
    /// Kind of document validated.
    const DOCUMENT_TYPE: DocumentType;

    /// Name used in user-facing messages.
    const LABEL: &'static str;

    /// The LC number the document claims to be presented under.
    fn lc_number(&self) -> &str;

    /// Phase 1: required-field presence.
    fn check_required(&self) -> Result<(), ValidationFailure>;

    /// Phase 2: the numbered rules against the LC terms.
    fn cross_validate(&self, terms: &LcTerms) -> Result<(), ValidationFailure>;

    /// Both phases, stopping at the first failure.
    fn validate(&self, terms: &LcTerms) -> Result<(), ValidationFailure> {
        self.check_required()?;
        self.cross_validate(terms)
    }
}

/// A typed export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ExportDocument {
    #[serde(rename = "BL")]
    BillOfLading(BillOfLading),
    #[serde(rename = "INVOICE")]
    Invoice(Invoice),
    #[serde(rename = "PACKINGLIST")]
    PackingList(PackingList),
}

impl ExportDocument {
    /// Decode a document of the given kind from JSON.
    pub fn from_json(doc_type: DocumentType, json: &str) -> Result<Self, ValidationFailure> {
        fn decode<T: serde::de::DeserializeOwned>(
            label: &'static str,
            json: &str,
        ) -> Result<T, ValidationFailure> {
            serde_json::from_str(json).map_err(|e| ValidationFailure::MalformedPayload {
                document: label,
                reason: e.to_string(),
            })
        }

        Ok(match doc_type {
            DocumentType::BillOfLading => Self::BillOfLading(decode(BillOfLading::LABEL, json)?),
            DocumentType::Invoice => Self::Invoice(decode(Invoice::LABEL, json)?),
            DocumentType::PackingList => Self::PackingList(decode(PackingList::LABEL, json)?),
        })
    }

    /// Serialize the payload alone (without the kind tag).
    pub fn payload_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::BillOfLading(doc) => serde_json::to_string(doc),
            Self::Invoice(doc) => serde_json::to_string(doc),
            Self::PackingList(doc) => serde_json::to_string(doc),
        }
    }

    /// Kind of this document.
    pub fn document_type(&self) -> DocumentType {
        match self {
            Self::BillOfLading(_) => BillOfLading::DOCUMENT_TYPE,
            Self::Invoice(_) => Invoice::DOCUMENT_TYPE,
            Self::PackingList(_) => PackingList::DOCUMENT_TYPE,
        }
    }

    /// Label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BillOfLading(_) => BillOfLading::LABEL,
            Self::Invoice(_) => Invoice::LABEL,
            Self::PackingList(_) => PackingList::LABEL,
        }
    }

    /// LC number the document claims.
    pub fn lc_number(&self) -> &str {
        match self {
            Self::BillOfLading(doc) => doc.lc_number(),
            Self::Invoice(doc) => doc.lc_number(),
            Self::PackingList(doc) => doc.lc_number(),
        }
    }

    /// Run both validation phases.
    pub fn validate(&self, terms: &LcTerms) -> Result<(), ValidationFailure> {
        let result = match self {
            Self::BillOfLading(doc) => doc.validate(terms),
            Self::Invoice(doc) => doc.validate(terms),
            Self::PackingList(doc) => doc.validate(terms),
        };
        if let Err(failure) = &result {
            tracing::debug!(document = self.label(), error = %failure, "export document failed validation");
        }
        result
    }
}

/// Whether a submitted JSON payload carries a document at all.
///
/// Blank input and an empty object (`{}`) both mean "not submitted".
pub fn is_present(json: &str) -> bool {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return false;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => !map.is_empty(),
        _ => true,
    }
}

/// Check that every document in a bundle names the same LC number and that
/// it is the credit number of `terms`.
pub fn cross_check_lc_numbers(
    documents: &[&ExportDocument],
    terms: &LcTerms,
) -> Result<(), ValidationFailure> {
    let expected = terms.credit_number();
    match documents.iter().find(|doc| doc.lc_number().trim() != expected) {
        Some(doc) => Err(ValidationFailure::LcNumberMismatch {
            document: doc.label(),
            found: doc.lc_number().to_string(),
            expected: expected.to_string(),
        }),
        None => Ok(()),
    }
}
