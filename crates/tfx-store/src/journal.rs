//! # Write Journal
//!
//! Records every write an operation performs so that the whole operation
//! can be rolled back if a later step fails.
//!
//! ## Effect Model
//!
//! ```text
//!   forward write            recorded effect       compensation
//!   ─────────────            ───────────────       ────────────
//!   create(record)     ──▶   Created(key)    ──▶   remove(key)
//!   replace(record)    ──▶   Replaced(prev)  ──▶   replace(prev)
//! ```
//!
//! Compensation runs the recorded effects in reverse order. Each undo is
//! idempotent (removing an absent key or restoring an already-restored
//! record is a no-op), so a partially failed compensation can be retried
//! and a completed one repeated safely.

use serde::Serialize;

use crate::error::StoreError;
use crate::record::{RecordKey, StoredRecord};
use crate::store::RecordStore;

/// One forward write, described by what is needed to undo it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WriteEffect {
    /// A new record was created under this key.
    Created(RecordKey),
    /// An existing record was overwritten; this is the previous value.
    Replaced(StoredRecord),
}

impl WriteEffect {
    /// The key the effect touched.
    pub fn key(&self) -> RecordKey {
        match self {
            Self::Created(key) => key.clone(),
            Self::Replaced(prev) => prev.key(),
        }
    }

    /// Apply the inverse of this effect.
    pub fn undo<S: RecordStore + ?Sized>(&self, store: &S) -> Result<(), StoreError> {
        match self {
            Self::Created(key) => match store.remove(key) {
                Ok(_) => Ok(()),
                Err(e) if e.is_not_found() => Ok(()),
                Err(e) => Err(e),
            },
            Self::Replaced(prev) => match store.replace(prev.clone()) {
                Ok(_) => Ok(()),
                Err(e) if e.is_not_found() => store.create(prev.clone()),
                Err(e) => Err(e),
            },
        }
    }
}

/// Lifecycle of a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JournalState {
    Open,
    Committed,
    Compensated,
}

/// Result of a compensation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompensationReport {
    /// Effects undone in this pass.
    pub undone: usize,
    /// Effects whose undo failed, with the failure. They remain pending.
    pub failures: Vec<(String, StoreError)>,
}

impl CompensationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A write-tracking view over a [`RecordStore`].
pub struct WriteJournal<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    forward: Vec<WriteEffect>,
    compensated: Vec<WriteEffect>,
    state: JournalState,
}

impl<'a, S: RecordStore + ?Sized> WriteJournal<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            forward: Vec::new(),
            compensated: Vec::new(),
            state: JournalState::Open,
        }
    }

    /// The underlying store, for reads.
    pub fn store(&self) -> &'a S {
        self.store
    }

    pub fn state(&self) -> JournalState {
        self.state
    }

    /// Forward effects not yet compensated, oldest first.
    pub fn effects(&self) -> &[WriteEffect] {
        &self.forward
    }

    /// Effects undone so far, in the order they were undone.
    pub fn compensated(&self) -> &[WriteEffect] {
        &self.compensated
    }

    /// Create a record and journal the creation.
    pub fn create(&mut self, record: StoredRecord) -> Result<(), StoreError> {
        let key = record.key();
        self.store.create(record)?;
        self.forward.push(WriteEffect::Created(key));
        Ok(())
    }

    /// Replace a record and journal its previous value.
    pub fn replace(&mut self, record: StoredRecord) -> Result<(), StoreError> {
        let previous = self.store.replace(record)?;
        self.forward.push(WriteEffect::Replaced(previous));
        Ok(())
    }

    /// Create the record if its key is free, otherwise replace.
    pub fn put(&mut self, record: StoredRecord) -> Result<(), StoreError> {
        if self.store.find(&record.key())?.is_some() {
            self.replace(record)
        } else {
            self.create(record)
        }
    }

    /// Accept every write. Returns the number of writes made.
    pub fn commit(mut self) -> usize {
        self.state = JournalState::Committed;
        tracing::trace!(writes = self.forward.len(), "write journal committed");
        self.forward.len()
    }

    /// Undo every pending effect in reverse order.
    ///
    /// Effects whose undo fails stay pending so a later call can retry them.
    /// Calling this on a fully compensated journal does nothing.
    pub fn compensate(&mut self) -> CompensationReport {
        let mut report = CompensationReport::default();
        let mut still_pending = Vec::new();

        while let Some(effect) = self.forward.pop() {
            match effect.undo(self.store) {
                Ok(()) => {
                    report.undone += 1;
                    self.compensated.push(effect);
                }
                Err(e) => {
                    tracing::warn!(key = %effect.key(), error = %e, "compensation step failed");
                    report.failures.push((effect.key().to_string(), e));
                    still_pending.push(effect);
                }
            }
        }

        still_pending.reverse();
        self.forward = still_pending;
        if self.forward.is_empty() {
            self.state = JournalState::Compensated;
        }
        report
    }
}
