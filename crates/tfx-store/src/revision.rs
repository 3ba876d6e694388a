//! # LC Revision Register
//!
//! Keeps every version of a letter of credit. The register stores two
//! kinds of record per contract:
//!
//! ```text
//!   LC:<uid>                 CurrentPointer { latest_revision = n, terms, status, ... }
//!   LC_REVISION:<uid>#0      original submission      (immutable)
//!   LC_REVISION:<uid>#1      first resubmission       (immutable)
//!   ...
//!   LC_REVISION:<uid>#n      content equal to the pointer's
//! ```
//!
//! The pointer is the only record that changes after creation. History
//! entries are written once and never replaced.

use thiserror::Error;

use tfx_core::{ContractId, Timestamp};
use tfx_documents::LcTerms;
use tfx_state::{LcMachine, LcStatus, LcTransitionRecord, StatusMachine, TransitionError};

use crate::error::StoreError;
use crate::journal::WriteJournal;
use crate::record::{Attachment, LcPointerRecord, LcRevisionRecord, RecordKey, StoredRecord};
use crate::store::RecordStore;

/// Comment stored with the original submission.
pub const SUBMISSION_COMMENT: &str = "LC_Submitted";

/// Errors raised by the revision register.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Revisioned access to letters of credit.
pub struct LcRegister<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> LcRegister<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// The current pointer, or `None` if no LC exists for `uid`.
    pub fn current(&self, uid: &ContractId) -> Result<Option<LcPointerRecord>, StoreError> {
        self.store
            .find(&RecordKey::lc_pointer(uid))?
            .map(StoredRecord::into_lc_pointer)
            .transpose()
    }

    /// The history entry for revision `n`.
    pub fn revision(
        &self,
        uid: &ContractId,
        n: u32,
    ) -> Result<Option<LcRevisionRecord>, StoreError> {
        self.store
            .find(&RecordKey::lc_revision(uid, n))?
            .map(StoredRecord::into_lc_revision)
            .transpose()
    }

    /// Every revision, oldest first. Empty if no LC exists.
    pub fn history(&self, uid: &ContractId) -> Result<Vec<LcRevisionRecord>, StoreError> {
        let Some(pointer) = self.current(uid)? else {
            return Ok(Vec::new());
        };
        let mut revisions = Vec::with_capacity(pointer.latest_revision as usize + 1);
        for n in 0..=pointer.latest_revision {
            let key = RecordKey::lc_revision(uid, n);
            revisions.push(self.store.get(&key)?.into_lc_revision()?);
        }
        Ok(revisions)
    }

    // ── Writes ──────────────────────────────────────────────────────

    /// Record the original submission as revision 0.
    pub fn open(
        &self,
        journal: &mut WriteJournal<'_, S>,
        uid: &ContractId,
        terms: LcTerms,
        attachment: Attachment,
    ) -> Result<LcPointerRecord, RegisterError> {
        let revision = LcRevisionRecord {
            uid: uid.clone(),
            revision: 0,
            terms: terms.clone(),
            attachment: attachment.clone(),
            comment: SUBMISSION_COMMENT.to_string(),
            recorded_at: Timestamp::now(),
        };
        let pointer = LcPointerRecord {
            uid: uid.clone(),
            latest_revision: 0,
            terms,
            attachment,
            status: LcMachine::initial(),
            comment: SUBMISSION_COMMENT.to_string(),
            transitions: Vec::new(),
        };
        journal.create(StoredRecord::LcRevision(revision))?;
        journal.create(StoredRecord::LcPointer(pointer.clone()))?;
        tracing::debug!(contract = %uid, "LC opened at revision 0");
        Ok(pointer)
    }

    /// Supersede the current content with revision `n + 1`.
    pub fn resubmit(
        &self,
        journal: &mut WriteJournal<'_, S>,
        uid: &ContractId,
        terms: LcTerms,
        attachment: Attachment,
        comment: &str,
    ) -> Result<LcPointerRecord, RegisterError> {
        let mut pointer = self.require_current(uid)?;
        let to = LcMachine::attempt_transition(pointer.status, LcStatus::ResubmittedByIb)?;
        let next = pointer.latest_revision + 1;

        journal.create(StoredRecord::LcRevision(LcRevisionRecord {
            uid: uid.clone(),
            revision: next,
            terms: terms.clone(),
            attachment: attachment.clone(),
            comment: comment.to_string(),
            recorded_at: Timestamp::now(),
        }))?;

        pointer
            .transitions
            .push(LcTransitionRecord::now(pointer.status, to, comment));
        pointer.latest_revision = next;
        pointer.terms = terms;
        pointer.attachment = attachment;
        pointer.status = to;
        pointer.comment = comment.to_string();
        journal.replace(StoredRecord::LcPointer(pointer.clone()))?;

        tracing::debug!(contract = %uid, revision = next, "LC resubmitted");
        Ok(pointer)
    }

    /// Move the LC along one machine edge.
    pub fn set_status(
        &self,
        journal: &mut WriteJournal<'_, S>,
        uid: &ContractId,
        requested: LcStatus,
        comment: &str,
    ) -> Result<LcPointerRecord, RegisterError> {
        let mut pointer = self.require_current(uid)?;
        let to = LcMachine::attempt_transition(pointer.status, requested)?;
        pointer
            .transitions
            .push(LcTransitionRecord::now(pointer.status, to, comment));
        pointer.status = to;
        pointer.comment = comment.to_string();
        journal.replace(StoredRecord::LcPointer(pointer.clone()))?;
        Ok(pointer)
    }

    fn require_current(&self, uid: &ContractId) -> Result<LcPointerRecord, StoreError> {
        self.store.get(&RecordKey::lc_pointer(uid))?.into_lc_pointer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn uid() -> ContractId {
        ContractId::new("C-1").unwrap()
    }

    fn terms(number: &str) -> LcTerms {
        LcTerms {
            tag20: number.to_string(),
            ..LcTerms::default()
        }
    }

    fn opened(store: &MemoryStore) {
        let register = LcRegister::new(store);
        let mut journal = WriteJournal::new(store);
        register
            .open(&mut journal, &uid(), terms("LC-1"), Attachment::default())
            .unwrap();
        journal.commit();
    }

    fn set(store: &MemoryStore, to: LcStatus, comment: &str) -> Result<LcPointerRecord, RegisterError> {
        let register = LcRegister::new(store);
        let mut journal = WriteJournal::new(store);
        let out = register.set_status(&mut journal, &uid(), to, comment);
        journal.commit();
        out
    }

    fn resubmit(store: &MemoryStore, number: &str) -> Result<LcPointerRecord, RegisterError> {
        let register = LcRegister::new(store);
        let mut journal = WriteJournal::new(store);
        let out = register.resubmit(
            &mut journal,
            &uid(),
            terms(number),
            Attachment(b"pdf".to_vec()),
            "fixed amount",
        );
        journal.commit();
        out
    }

    #[test]
    fn open_writes_revision_zero_and_pointer() {
        let store = MemoryStore::new();
        opened(&store);
        let register = LcRegister::new(&store);
        let current = register.current(&uid()).unwrap().unwrap();
        assert_eq!(current.latest_revision, 0);
        assert_eq!(current.status, LcStatus::SubmittedByIb);
        assert_eq!(current.comment, "LC_Submitted");
        let history = register.history(&uid()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].terms.tag20, "LC-1");
    }

    #[test]
    fn open_twice_fails() {
        let store = MemoryStore::new();
        opened(&store);
        let register = LcRegister::new(&store);
        let mut journal = WriteJournal::new(&store);
        let err = register
            .open(&mut journal, &uid(), terms("LC-2"), Attachment::default())
            .unwrap_err();
        assert!(matches!(err, RegisterError::Store(StoreError::AlreadyExists { .. })));
    }

    #[test]
    fn resubmit_after_rejection_increments_revision() {
        let store = MemoryStore::new();
        opened(&store);
        set(&store, LcStatus::RejectedByEb, "LC_Rejected").unwrap();

        let pointer = resubmit(&store, "LC-1b").unwrap();
        assert_eq!(pointer.latest_revision, 1);
        assert_eq!(pointer.status, LcStatus::ResubmittedByIb);
        assert_eq!(pointer.comment, "fixed amount");

        set(&store, LcStatus::RejectedByEb, "LC_Rejected").unwrap();
        let pointer = resubmit(&store, "LC-1c").unwrap();
        assert_eq!(pointer.latest_revision, 2);

        let register = LcRegister::new(&store);
        let numbers: Vec<_> = register
            .history(&uid())
            .unwrap()
            .into_iter()
            .map(|r| r.terms.tag20)
            .collect();
        assert_eq!(numbers, ["LC-1", "LC-1b", "LC-1c"]);
        assert_eq!(register.revision(&uid(), 1).unwrap().unwrap().terms.tag20, "LC-1b");
        assert_eq!(register.current(&uid()).unwrap().unwrap().transitions.len(), 4);
    }

    #[test]
    fn resubmit_without_rejection_is_illegal() {
        let store = MemoryStore::new();
        opened(&store);
        let err = resubmit(&store, "LC-x").unwrap_err();
        assert!(matches!(err, RegisterError::Transition(_)));
        assert!(LcRegister::new(&store).revision(&uid(), 1).unwrap().is_none());
    }

    #[test]
    fn repeated_accept_is_illegal() {
        let store = MemoryStore::new();
        opened(&store);
        set(&store, LcStatus::AcceptedByEb, "LC_Accepted").unwrap();
        let err = set(&store, LcStatus::AcceptedByEb, "LC_Accepted").unwrap_err();
        assert!(matches!(
            err,
            RegisterError::Transition(TransitionError::IllegalTransition { .. })
        ));
    }

    #[test]
    fn reads_of_absent_lc_are_empty() {
        let store = MemoryStore::new();
        let register = LcRegister::new(&store);
        assert!(register.current(&uid()).unwrap().is_none());
        assert!(register.history(&uid()).unwrap().is_empty());
    }

    #[test]
    fn status_change_on_absent_lc_is_not_found() {
        let store = MemoryStore::new();
        let err = set(&store, LcStatus::AcceptedByEb, "x").unwrap_err();
        assert!(matches!(err, RegisterError::Store(StoreError::NotFound { .. })));
    }
}
