//! # Record Store Contract
//!
//! The persistence seam of the workflow. Every operation is keyed by a
//! [`RecordKey`]; a record carries its own key, so writes take only the
//! record.
//!
//! Writes are individually atomic. Multi-record atomicity is layered on
//! top by [`WriteJournal`](crate::WriteJournal), which records enough to
//! undo each write.

use crate::error::StoreError;
use crate::record::{RecordKey, RecordKind, StoredRecord};

/// Keyed record storage.
pub trait RecordStore: Send + Sync {
    /// Insert a new record. Fails with `AlreadyExists` if the key is taken.
    fn create(&self, record: StoredRecord) -> Result<(), StoreError>;

    /// Read the record under `key`. Fails with `NotFound` if absent.
    fn get(&self, key: &RecordKey) -> Result<StoredRecord, StoreError>;

    /// Overwrite an existing record and return the previous one.
    /// Fails with `NotFound` if absent.
    fn replace(&self, record: StoredRecord) -> Result<StoredRecord, StoreError>;

    /// Delete the record under `key` and return it.
    fn remove(&self, key: &RecordKey) -> Result<StoredRecord, StoreError>;

    /// Every key of `kind`, in insertion order.
    fn keys(&self, kind: RecordKind) -> Result<Vec<RecordKey>, StoreError>;

    /// Read the record under `key`, mapping absence to `None`.
    fn find(&self, key: &RecordKey) -> Result<Option<StoredRecord>, StoreError> {
        match self.get(key) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Lazily enumerate every record of `kind`.
    fn enumerate(&self, kind: RecordKind) -> Result<Enumeration<'_, Self>, StoreError>
    where
        Self: Sized,
    {
        Ok(Enumeration::new(self, self.keys(kind)?))
    }
}

/// A restartable cursor over the records of one kind.
///
/// The key set is captured when the cursor is created; each record is read
/// when the cursor reaches it. Keys removed in between are skipped.
pub struct Enumeration<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    keys: Vec<RecordKey>,
    position: usize,
}

impl<'a, S: RecordStore + ?Sized> Enumeration<'a, S> {
    pub fn new(store: &'a S, keys: Vec<RecordKey>) -> Self {
        Self {
            store,
            keys,
            position: 0,
        }
    }

    /// Restart from the first key.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Number of keys captured.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: RecordStore + ?Sized> Clone for Enumeration<'_, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            keys: self.keys.clone(),
            position: self.position,
        }
    }
}

impl<S: RecordStore + ?Sized> Iterator for Enumeration<'_, S> {
    type Item = Result<StoredRecord, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.keys.get(self.position) {
            self.position += 1;
            match self.store.find(key) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}
