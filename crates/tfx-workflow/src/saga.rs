//! # Write Saga
//!
//! Multi-record operations (`submit_lc`, `submit_ed`, `accept_ed`,
//! `reject_ed`, `resubmit_lc`, `create_po`) run inside a [`Saga`]. Each
//! write goes through the saga's [`WriteJournal`]; if the body fails, the
//! journal is compensated in reverse and the original error is returned.
//!
//! ```text
//!   begin ──▶ body(journal) ──Ok──▶ commit ──▶ Ok(value)
//!                  │
//!                  └──Err(cause)──▶ compensate ──clean──▶ Err(cause)
//!                                        │
//!                                        └──dirty──▶ Err(CompensationFailed)
//! ```

use uuid::Uuid;

use tfx_store::{RecordStore, WriteJournal};

use crate::audit::{AuditSink, WorkflowEvent};
use crate::error::WorkflowError;

/// One all-or-nothing workflow operation.
pub struct Saga<'a, S: RecordStore + ?Sized> {
    id: Uuid,
    operation: &'static str,
    journal: WriteJournal<'a, S>,
    audit: &'a dyn AuditSink,
}

impl<'a, S: RecordStore + ?Sized> Saga<'a, S> {
    pub fn begin(store: &'a S, operation: &'static str, audit: &'a dyn AuditSink) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(saga = %id, operation, "saga started");
        Self {
            id,
            operation,
            journal: WriteJournal::new(store),
            audit,
        }
    }

    /// Run `body` as one saga: commit on success, compensate on failure.
    pub fn run<T>(
        store: &'a S,
        operation: &'static str,
        audit: &'a dyn AuditSink,
        body: impl FnOnce(&mut WriteJournal<'a, S>) -> Result<T, WorkflowError>,
    ) -> Result<T, WorkflowError> {
        let mut saga = Self::begin(store, operation, audit);
        match body(saga.journal()) {
            Ok(value) => {
                saga.complete();
                Ok(value)
            }
            Err(cause) => Err(saga.abort(cause)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn journal(&mut self) -> &mut WriteJournal<'a, S> {
        &mut self.journal
    }

    /// Accept every write.
    pub fn complete(self) -> usize {
        let writes = self.journal.commit();
        tracing::debug!(saga = %self.id, operation = self.operation, writes, "saga committed");
        writes
    }

    /// Roll back every write and return the error the caller should see.
    pub fn abort(mut self, cause: WorkflowError) -> WorkflowError {
        if self.journal.effects().is_empty() {
            return cause;
        }

        let already = self.journal.compensated().len();
        let report = self.journal.compensate();

        for effect in &self.journal.compensated()[already..] {
            self.audit.record(WorkflowEvent::CompensationStep {
                saga: self.id,
                key: effect.key().to_string(),
                undone: true,
            });
        }
        for (key, _) in &report.failures {
            self.audit.record(WorkflowEvent::CompensationStep {
                saga: self.id,
                key: key.clone(),
                undone: false,
            });
        }
        self.audit.record(WorkflowEvent::Compensated {
            saga: self.id,
            operation: self.operation,
            undone: report.undone,
            failed: report.failures.len(),
        });

        if report.is_clean() {
            cause
        } else {
            WorkflowError::CompensationFailed {
                operation: self.operation,
                cause: Box::new(cause),
                inconsistent: report.failures.into_iter().map(|(key, _)| key).collect(),
            }
        }
    }
}
