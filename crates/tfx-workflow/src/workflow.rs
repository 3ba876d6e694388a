//! # Trade-Finance Workflow
//!
//! The orchestrator. Every operation follows the same shape:
//!
//! ```text
//!   parse arguments ──▶ authorize ──▶ read current state ──▶ validate
//!        │                  │                │                  │
//!   InvalidArgument    Unauthorized       NotFound        Rejected(report)
//!                                                               │
//!                                         confirm machine edges ┘
//!                                                │
//!                                        IllegalTransition
//!                                                │
//!                                   saga: journaled writes ──▶ Applied
//!                                                │
//!                                      compensate on failure
//! ```
//!
//! Validation failures come back as `Ok(OperationOutcome::Rejected(..))`
//! and write nothing. Request failures come back as `Err(WorkflowError)`
//! after any writes of the call have been compensated.
//!
//! Role requirements apply only when
//! [`WorkflowConfig::enforce_authorization`] is set:
//!
//! | Operation | Role |
//! |-----------|------|
//! | `accept_lc`, `reject_lc`, `payment_received`, `defaulted_on_payment`, `validate_ed` | ExporterBank |
//! | `accept_ed`, `reject_ed`, `accept_to_pay` | ImporterBank |
//! | `get_lc`, `get_lc_status`, `get_ed`, `get_ed_status`, `get_contract_participants` | any participant |

use std::sync::Arc;

use tfx_core::{ContractId, DocumentFormat, DocumentType, Role};
use tfx_documents::{
    cross_check_lc_numbers, is_present, ExportDocument, LcTerms, ValidationFailure,
    ValidationReport, DOCUMENT_SUCCESS, LC_SUCCESS,
};
use tfx_state::{ExportDocumentMachine, ExportDocumentStatus, LcStatus, StatusMachine};
use tfx_store::{
    Attachment, BusinessProcessRecord, ExportDocumentRecord, LcPointerRecord, LcRegister,
    LcRevisionRecord, RecordKey, RecordStore, StoredRecord,
};

use crate::audit::{AuditSink, TracingAuditSink, WorkflowEvent};
use crate::auth::AuthorizationPort;
use crate::config::WorkflowConfig;
use crate::error::{OperationOutcome, WorkflowError};
use crate::saga::Saga;

// ─── Status comments ─────────────────────────────────────────────────

pub const COMMENT_ACCEPTED: &str = "LC_Accepted";
pub const COMMENT_REJECTED: &str = "LC_Rejected";
pub const COMMENT_PAYMENT: &str = "Payment";
pub const COMMENT_PAYMENT_DEFAULTED: &str = "Payment_defaulted";
pub const COMMENT_PAYMENT_DUE: &str = "Payment_due";

/// Export document content in the requested format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    Json(String),
    Pdf(Vec<u8>),
}

// ─── Orchestrator ────────────────────────────────────────────────────

/// LC and export-document workflow over a record store and an
/// authorization port.
pub struct TradeFinanceWorkflow<S, A> {
    pub(crate) store: S,
    pub(crate) auth: A,
    pub(crate) config: WorkflowConfig,
    pub(crate) audit: Arc<dyn AuditSink>,
}

impl<S: RecordStore, A: AuthorizationPort> TradeFinanceWorkflow<S, A> {
    /// Build a workflow that reports to `tracing`.
    pub fn new(store: S, auth: A, config: WorkflowConfig) -> Self {
        Self {
            store,
            auth,
            config,
            audit: Arc::new(TracingAuditSink),
        }
    }

    /// Replace the audit sink.
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = sink;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> WorkflowConfig {
        self.config
    }

    // ── Guards ──────────────────────────────────────────────────────

    /// Whether the caller holds `role` on `contract`, regardless of
    /// whether authorization is enforced.
    pub fn caller_holds_role(&self, contract: &str, role: &str) -> Result<bool, WorkflowError> {
        let contract = ContractId::new(contract)?;
        let role: Role = role.parse()?;
        Ok(self.auth.is_participant(&contract, role)?)
    }

    pub(crate) fn require_role(
        &self,
        contract: &ContractId,
        role: Role,
        action: &'static str,
    ) -> Result<(), WorkflowError> {
        if !self.config.enforce_authorization || self.auth.is_participant(contract, role)? {
            return Ok(());
        }
        Err(WorkflowError::Unauthorized {
            contract: contract.to_string(),
            role,
            action,
        })
    }

    pub(crate) fn require_participant(
        &self,
        contract: &ContractId,
        action: &'static str,
    ) -> Result<(), WorkflowError> {
        if !self.config.enforce_authorization || self.auth.is_any_participant(contract)? {
            return Ok(());
        }
        Err(WorkflowError::NotParticipant {
            contract: contract.to_string(),
            action,
        })
    }

    /// Whether the caller may see `contract` in a listing.
    pub(crate) fn visible(&self, contract: &ContractId) -> Result<bool, WorkflowError> {
        Ok(!self.config.enforce_authorization || self.auth.is_any_participant(contract)?)
    }

    // ── Audit helpers ───────────────────────────────────────────────

    /// Run `body`, reporting a request failure to the audit sink.
    pub(crate) fn audited<T>(
        &self,
        operation: &'static str,
        contract: Option<&str>,
        body: impl FnOnce() -> Result<T, WorkflowError>,
    ) -> Result<T, WorkflowError> {
        body().map_err(|err| {
            self.audit.record(WorkflowEvent::Rejected {
                operation,
                contract: contract.map(str::to_string),
                reason: err.to_string(),
            });
            err
        })
    }

    /// Report a validation failure and turn it into an outcome.
    fn reject(
        &self,
        operation: &'static str,
        contract: &ContractId,
        failure: &ValidationFailure,
    ) -> OperationOutcome {
        let report = ValidationReport::failed(failure);
        self.audit.record(WorkflowEvent::Rejected {
            operation,
            contract: Some(contract.to_string()),
            reason: report.result.clone(),
        });
        OperationOutcome::Rejected(report)
    }

    // ── Shared reads ────────────────────────────────────────────────

    pub(crate) fn find_bp(
        &self,
        uid: &ContractId,
    ) -> Result<Option<BusinessProcessRecord>, WorkflowError> {
        Ok(self
            .store
            .find(&RecordKey::business_process(uid))?
            .map(StoredRecord::into_business_process)
            .transpose()?)
    }

    pub(crate) fn find_lc(&self, uid: &ContractId) -> Result<Option<LcPointerRecord>, WorkflowError> {
        Ok(LcRegister::new(&self.store).current(uid)?)
    }

    fn require_lc(&self, uid: &ContractId) -> Result<LcPointerRecord, WorkflowError> {
        self.find_lc(uid)?
            .ok_or_else(|| WorkflowError::not_found(RecordKey::lc_pointer(uid)))
    }

    pub(crate) fn find_document(
        &self,
        uid: &ContractId,
        doc_type: DocumentType,
    ) -> Result<Option<ExportDocumentRecord>, WorkflowError> {
        Ok(self
            .store
            .find(&RecordKey::document(doc_type, uid))?
            .map(StoredRecord::into_export_document)
            .transpose()?)
    }

    // ─── Letter of credit ───────────────────────────────────────────

    /// Check LC terms without touching the store.
    pub fn validate_lc(&self, lc_json: &str) -> ValidationReport {
        let result = LcTerms::from_json(lc_json).and_then(|terms| terms.check_terms());
        ValidationReport::from_result(&result, LC_SUCCESS)
    }

    /// Open a contract: create its business-process record and revision 0
    /// of its LC.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_lc(
        &self,
        uid: &str,
        lc_json: &str,
        attachment: &[u8],
        importer_name: &str,
        exporter_name: &str,
        importer_bank_name: &str,
        exporter_bank_name: &str,
    ) -> Result<OperationOutcome, WorkflowError> {
        self.audited("submit_lc", Some(uid), || {
            let uid = ContractId::new(uid)?;
            let terms = match parse_terms(lc_json) {
                Ok(terms) => terms,
                Err(failure) => return Ok(self.reject("submit_lc", &uid, &failure)),
            };

            let bp = BusinessProcessRecord::started(
                uid.clone(),
                importer_name,
                exporter_name,
                importer_bank_name,
                exporter_bank_name,
            );
            let register = LcRegister::new(&self.store);
            Saga::run(&self.store, "submit_lc", self.audit.as_ref(), |journal| {
                journal.create(StoredRecord::BusinessProcess(bp))?;
                register.open(journal, &uid, terms, Attachment::from(attachment))?;
                Ok(())
            })?;

            self.audit.record(WorkflowEvent::LcSubmitted {
                contract: uid.to_string(),
            });
            Ok(OperationOutcome::Applied)
        })
    }

    /// Replace a rejected LC with new terms as the next revision.
    pub fn resubmit_lc(
        &self,
        uid: &str,
        lc_json: &str,
        attachment: &[u8],
        comment: &str,
    ) -> Result<OperationOutcome, WorkflowError> {
        self.audited("resubmit_lc", Some(uid), || {
            let uid = ContractId::new(uid)?;
            let terms = match parse_terms(lc_json) {
                Ok(terms) => terms,
                Err(failure) => return Ok(self.reject("resubmit_lc", &uid, &failure)),
            };

            let register = LcRegister::new(&self.store);
            let pointer = Saga::run(&self.store, "resubmit_lc", self.audit.as_ref(), |journal| {
                Ok(register.resubmit(journal, &uid, terms, Attachment::from(attachment), comment)?)
            })?;

            self.audit.record(WorkflowEvent::LcResubmitted {
                contract: uid.to_string(),
                revision: pointer.latest_revision,
            });
            Ok(OperationOutcome::Applied)
        })
    }

    pub fn accept_lc(&self, uid: &str) -> Result<OperationOutcome, WorkflowError> {
        self.transition_lc(
            "accept_lc",
            uid,
            Role::ExporterBank,
            "accept the L/C",
            LcStatus::AcceptedByEb,
            COMMENT_ACCEPTED,
        )
    }

    pub fn reject_lc(&self, uid: &str) -> Result<OperationOutcome, WorkflowError> {
        self.transition_lc(
            "reject_lc",
            uid,
            Role::ExporterBank,
            "reject the L/C",
            LcStatus::RejectedByEb,
            COMMENT_REJECTED,
        )
    }

    /// The importer's bank declares payment due.
    pub fn accept_to_pay(&self, uid: &str) -> Result<OperationOutcome, WorkflowError> {
        self.transition_lc(
            "accept_to_pay",
            uid,
            Role::ImporterBank,
            "accept to pay",
            LcStatus::PaymentDueFromIbToEb,
            COMMENT_PAYMENT_DUE,
        )
    }

    /// Record payment. Only legal once payment is due.
    pub fn payment_received(&self, uid: &str) -> Result<OperationOutcome, WorkflowError> {
        self.audited("payment_received", Some(uid), || {
            let uid = ContractId::new(uid)?;
            self.require_role(&uid, Role::ExporterBank, "record payment")?;
            if self.require_lc(&uid)?.status != LcStatus::PaymentDueFromIbToEb {
                return Err(WorkflowError::PreconditionFailed(
                    "Payment is not yet due.".to_string(),
                ));
            }
            self.apply_lc_status("payment_received", &uid, LcStatus::PaymentReceived, COMMENT_PAYMENT)
        })
    }

    pub fn defaulted_on_payment(&self, uid: &str) -> Result<OperationOutcome, WorkflowError> {
        self.transition_lc(
            "defaulted_on_payment",
            uid,
            Role::ExporterBank,
            "record a payment default",
            LcStatus::PaymentDefaulted,
            COMMENT_PAYMENT_DEFAULTED,
        )
    }

    fn transition_lc(
        &self,
        operation: &'static str,
        uid: &str,
        role: Role,
        action: &'static str,
        to: LcStatus,
        comment: &str,
    ) -> Result<OperationOutcome, WorkflowError> {
        self.audited(operation, Some(uid), || {
            let uid = ContractId::new(uid)?;
            self.require_role(&uid, role, action)?;
            self.apply_lc_status(operation, &uid, to, comment)
        })
    }

    /// Move the LC to `to` in its own saga. Callers audit and authorize.
    fn apply_lc_status(
        &self,
        operation: &'static str,
        uid: &ContractId,
        to: LcStatus,
        comment: &str,
    ) -> Result<OperationOutcome, WorkflowError> {
        let register = LcRegister::new(&self.store);
        let pointer = Saga::run(&self.store, operation, self.audit.as_ref(), |journal| {
            Ok(register.set_status(journal, uid, to, comment)?)
        })?;
        if let Some(applied) = pointer.transitions.last() {
            self.audit.record(WorkflowEvent::LcStatusChanged {
                contract: uid.to_string(),
                from: applied.from_status,
                to: applied.to_status,
                comment: applied.comment.clone(),
            });
        }
        Ok(OperationOutcome::Applied)
    }

    /// Current LC terms.
    pub fn get_lc(&self, uid: &str) -> Result<Option<LcTerms>, WorkflowError> {
        let uid = ContractId::new(uid)?;
        self.require_participant(&uid, "read the L/C")?;
        Ok(self.find_lc(&uid)?.map(|pointer| pointer.terms))
    }

    /// Current LC attachment.
    pub fn get_lc_attachment(&self, uid: &str) -> Result<Option<Vec<u8>>, WorkflowError> {
        let uid = ContractId::new(uid)?;
        self.require_participant(&uid, "read the L/C")?;
        Ok(self.find_lc(&uid)?.map(|pointer| pointer.attachment.0))
    }

    pub fn get_lc_status(&self, uid: &str) -> Result<Option<LcStatus>, WorkflowError> {
        let uid = ContractId::new(uid)?;
        self.require_participant(&uid, "read the L/C status")?;
        Ok(self.find_lc(&uid)?.map(|pointer| pointer.status))
    }

    pub fn get_lc_revision(
        &self,
        uid: &str,
        revision: u32,
    ) -> Result<Option<LcRevisionRecord>, WorkflowError> {
        let uid = ContractId::new(uid)?;
        self.require_participant(&uid, "read the L/C history")?;
        Ok(LcRegister::new(&self.store).revision(&uid, revision)?)
    }

    /// Every LC revision, oldest first.
    pub fn get_lc_history(&self, uid: &str) -> Result<Vec<LcRevisionRecord>, WorkflowError> {
        let uid = ContractId::new(uid)?;
        self.require_participant(&uid, "read the L/C history")?;
        Ok(LcRegister::new(&self.store).history(&uid)?)
    }

    /// The business-process record of a contract.
    pub fn get_bp(&self, uid: &str) -> Result<Option<BusinessProcessRecord>, WorkflowError> {
        self.find_bp(&ContractId::new(uid)?)
    }

    // ─── Export documents ───────────────────────────────────────────

    /// Validate one export document against the contract's current LC.
    pub fn validate_ed(
        &self,
        contract: &str,
        doc_type: &str,
        json: &str,
    ) -> Result<ValidationReport, WorkflowError> {
        let contract = ContractId::new(contract)?;
        let doc_type = parse_document_type(doc_type)?;
        self.require_role(&contract, Role::ExporterBank, "validate export documents")?;
        let terms = self.require_lc(&contract)?.terms;
        let result =
            ExportDocument::from_json(doc_type, json).and_then(|doc| doc.validate(&terms));
        Ok(ValidationReport::from_result(&result, DOCUMENT_SUCCESS))
    }

    /// Present export documents under a contract's LC.
    ///
    /// Blank or `{}` JSON means the document is not part of this
    /// submission. Every present document is validated, and when all three
    /// are present their LC numbers are cross-checked, before anything is
    /// written.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_ed(
        &self,
        contract: &str,
        bl_attachment: &[u8],
        invoice_attachment: &[u8],
        pl_attachment: &[u8],
        bl_json: &str,
        invoice_json: &str,
        pl_json: &str,
        shipping_company: &str,
        insurance_company: &str,
    ) -> Result<OperationOutcome, WorkflowError> {
        self.audited("submit_ed", Some(contract), || {
            let uid = ContractId::new(contract)?;
            let mut bp = self
                .find_bp(&uid)?
                .ok_or_else(|| WorkflowError::not_found(RecordKey::business_process(&uid)))?;
            let terms = self.require_lc(&uid)?.terms;

            let submitted = [
                (DocumentType::BillOfLading, bl_json, bl_attachment),
                (DocumentType::Invoice, invoice_json, invoice_attachment),
                (DocumentType::PackingList, pl_json, pl_attachment),
            ];
            let mut documents = Vec::with_capacity(submitted.len());
            for (doc_type, json, attachment) in submitted {
                if !is_present(json) {
                    continue;
                }
                let checked = ExportDocument::from_json(doc_type, json)
                    .and_then(|doc| doc.validate(&terms).map(|()| doc));
                match checked {
                    Ok(doc) => documents.push((doc, Attachment::from(attachment))),
                    Err(failure) => return Ok(self.reject("submit_ed", &uid, &failure)),
                }
            }
            if documents.len() == DocumentType::ALL.len() {
                let bundle: Vec<&ExportDocument> = documents.iter().map(|(doc, _)| doc).collect();
                if let Err(failure) = cross_check_lc_numbers(&bundle, &terms) {
                    return Ok(self.reject("submit_ed", &uid, &failure));
                }
            }

            bp.shipping_company = shipping_company.to_string();
            bp.insurance_company = insurance_company.to_string();
            let doc_types: Vec<DocumentType> =
                documents.iter().map(|(doc, _)| doc.document_type()).collect();
            let register = LcRegister::new(&self.store);
            let advance = self.config.advance_lc_on_submission;

            let advanced = Saga::run(&self.store, "submit_ed", self.audit.as_ref(), |journal| {
                journal.replace(StoredRecord::BusinessProcess(bp))?;
                for (document, attachment) in documents {
                    journal.create(StoredRecord::ExportDocument(ExportDocumentRecord {
                        uid: uid.clone(),
                        document,
                        attachment,
                        status: ExportDocumentMachine::initial(),
                    }))?;
                }
                if advance {
                    let pointer = register.set_status(
                        journal,
                        &uid,
                        LcStatus::PaymentDueFromIbToEb,
                        COMMENT_PAYMENT_DUE,
                    )?;
                    return Ok(pointer.transitions.last().cloned());
                }
                Ok(None)
            })?;

            self.audit.record(WorkflowEvent::DocumentsSubmitted {
                contract: uid.to_string(),
                documents: doc_types,
            });
            if let Some(applied) = advanced {
                self.audit.record(WorkflowEvent::LcStatusChanged {
                    contract: uid.to_string(),
                    from: applied.from_status,
                    to: applied.to_status,
                    comment: applied.comment,
                });
            }
            Ok(OperationOutcome::Applied)
        })
    }

    /// Accept the full document bundle. All three documents must be on
    /// file and still agree with the current LC.
    pub fn accept_ed(&self, contract: &str) -> Result<OperationOutcome, WorkflowError> {
        self.review_documents(
            "accept_ed",
            contract,
            "accept export documents",
            ExportDocumentStatus::AcceptedByIb,
        )
    }

    /// Reject every document on file.
    pub fn reject_ed(&self, contract: &str) -> Result<OperationOutcome, WorkflowError> {
        self.review_documents(
            "reject_ed",
            contract,
            "reject export documents",
            ExportDocumentStatus::RejectedByIb,
        )
    }

    fn review_documents(
        &self,
        operation: &'static str,
        contract: &str,
        action: &'static str,
        to: ExportDocumentStatus,
    ) -> Result<OperationOutcome, WorkflowError> {
        self.audited(operation, Some(contract), || {
            let uid = ContractId::new(contract)?;
            self.require_role(&uid, Role::ImporterBank, action)?;

            let mut records = Vec::with_capacity(DocumentType::ALL.len());
            for doc_type in DocumentType::ALL {
                if let Some(record) = self.find_document(&uid, doc_type)? {
                    records.push(record);
                }
            }
            if records.is_empty() {
                return Err(WorkflowError::not_found(RecordKey::document(
                    DocumentType::BillOfLading,
                    &uid,
                )));
            }

            if to == ExportDocumentStatus::AcceptedByIb {
                if records.len() != DocumentType::ALL.len() {
                    return Err(WorkflowError::PreconditionFailed(
                        "All three export documents must be submitted before acceptance."
                            .to_string(),
                    ));
                }
                let terms = self.require_lc(&uid)?.terms;
                let bundle: Vec<&ExportDocument> = records.iter().map(|r| &r.document).collect();
                if let Err(failure) = cross_check_lc_numbers(&bundle, &terms) {
                    return Ok(self.reject(operation, &uid, &failure));
                }
            }

            // Every edge is confirmed before the first write.
            let mut changes = Vec::with_capacity(records.len());
            for record in &records {
                let next = ExportDocumentMachine::attempt_transition(record.status, to)?;
                changes.push((record.document.document_type(), record.status, next));
            }

            Saga::run(&self.store, operation, self.audit.as_ref(), |journal| {
                for mut record in records {
                    record.status = to;
                    journal.replace(StoredRecord::ExportDocument(record))?;
                }
                Ok(())
            })?;

            for (document, from, to) in changes {
                self.audit.record(WorkflowEvent::DocumentStatusChanged {
                    contract: uid.to_string(),
                    document,
                    from,
                    to,
                });
            }
            Ok(OperationOutcome::Applied)
        })
    }

    /// A stored export document as JSON or as its attachment.
    pub fn get_ed(
        &self,
        contract: &str,
        doc_type: &str,
        format: &str,
    ) -> Result<Option<DocumentContent>, WorkflowError> {
        let uid = ContractId::new(contract)?;
        let doc_type = parse_document_type(doc_type)?;
        let format: DocumentFormat = format.parse().map_err(|_| {
            WorkflowError::InvalidArgument("Document format should be JSON or PDF".to_string())
        })?;
        self.require_participant(&uid, "read export documents")?;

        let Some(record) = self.find_document(&uid, doc_type)? else {
            return Ok(None);
        };
        Ok(Some(match format {
            DocumentFormat::Json => DocumentContent::Json(record.document.payload_json()?),
            DocumentFormat::Pdf => DocumentContent::Pdf(record.attachment.0),
        }))
    }

    /// Status of the export-document bundle, read from the bill of lading
    /// only. The documents on file always move together, so the BL speaks
    /// for the bundle. A partial bundle without a BL has no status and
    /// gives `None` even when an invoice or packing list is on file.
    pub fn get_ed_status(
        &self,
        contract: &str,
    ) -> Result<Option<ExportDocumentStatus>, WorkflowError> {
        let uid = ContractId::new(contract)?;
        self.require_participant(&uid, "read export document status")?;
        Ok(self
            .find_document(&uid, DocumentType::BillOfLading)?
            .map(|record| record.status))
    }
}

fn parse_terms(lc_json: &str) -> Result<LcTerms, ValidationFailure> {
    let terms = LcTerms::from_json(lc_json)?;
    terms.check_terms()?;
    Ok(terms)
}

fn parse_document_type(raw: &str) -> Result<DocumentType, WorkflowError> {
    raw.parse().map_err(|_| {
        WorkflowError::InvalidArgument(
            "Document type should be BL or INVOICE or PACKINGLIST".to_string(),
        )
    })
}
