//! # Audit Port
//!
//! Every mutation, rejection and compensation step is reported to an
//! injected [`AuditSink`] as a typed [`WorkflowEvent`]. The workflow keeps
//! no logger of its own.
//!
//! - [`TracingAuditSink`] forwards events to `tracing` with structured
//!   fields. Rejections and compensation are logged at `warn`.
//! - [`MemoryAuditSink`] keeps events in memory for inspection.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use tfx_core::{DocumentType, PurchaseOrderId};
use tfx_state::{ExportDocumentStatus, LcStatus};

/// Something the workflow did or refused to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkflowEvent {
    LcSubmitted {
        contract: String,
    },
    LcResubmitted {
        contract: String,
        revision: u32,
    },
    LcStatusChanged {
        contract: String,
        from: LcStatus,
        to: LcStatus,
        comment: String,
    },
    DocumentsSubmitted {
        contract: String,
        documents: Vec<DocumentType>,
    },
    DocumentStatusChanged {
        contract: String,
        document: DocumentType,
        from: ExportDocumentStatus,
        to: ExportDocumentStatus,
    },
    PurchaseOrderCreated {
        id: PurchaseOrderId,
    },
    /// Validation or a request check stopped the operation.
    Rejected {
        operation: &'static str,
        contract: Option<String>,
        reason: String,
    },
    /// One journaled write was undone (or failed to be).
    CompensationStep {
        saga: Uuid,
        key: String,
        undone: bool,
    },
    /// A saga finished rolling back.
    Compensated {
        saga: Uuid,
        operation: &'static str,
        undone: usize,
        failed: usize,
    },
}

/// Receiver of workflow events.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: WorkflowEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: WorkflowEvent) {
        match &event {
            WorkflowEvent::LcSubmitted { contract } => {
                tracing::info!(contract = %contract, "LC submitted");
            }
            WorkflowEvent::LcResubmitted { contract, revision } => {
                tracing::info!(contract = %contract, revision, "LC resubmitted");
            }
            WorkflowEvent::LcStatusChanged {
                contract,
                from,
                to,
                comment,
            } => {
                tracing::info!(contract = %contract, from = %from, to = %to, comment = %comment, "LC status changed");
            }
            WorkflowEvent::DocumentsSubmitted { contract, documents } => {
                tracing::info!(contract = %contract, documents = ?documents, "export documents submitted");
            }
            WorkflowEvent::DocumentStatusChanged {
                contract,
                document,
                from,
                to,
            } => {
                tracing::info!(contract = %contract, document = %document, from = %from, to = %to, "export document status changed");
            }
            WorkflowEvent::PurchaseOrderCreated { id } => {
                tracing::info!(po = %id, "purchase order created");
            }
            WorkflowEvent::Rejected {
                operation,
                contract,
                reason,
            } => {
                tracing::warn!(operation, contract = ?contract, reason = %reason, "operation rejected");
            }
            WorkflowEvent::CompensationStep { saga, key, undone } => {
                if *undone {
                    tracing::warn!(saga = %saga, key = %key, "write compensated");
                } else {
                    tracing::error!(saga = %saga, key = %key, "write could not be compensated");
                }
            }
            WorkflowEvent::Compensated {
                saga,
                operation,
                undone,
                failed,
            } => {
                tracing::warn!(saga = %saga, operation, undone, failed, "saga compensated");
            }
        }
    }
}

/// Keeps events in memory. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditSink {
    events: Arc<Mutex<Vec<WorkflowEvent>>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event recorded so far, oldest first.
    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: WorkflowEvent) {
        self.events.lock().push(event);
    }
}
