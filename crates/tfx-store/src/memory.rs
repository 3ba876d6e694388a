//! In-memory [`RecordStore`].
//!
//! Records live in a `HashMap` behind a `parking_lot::RwLock`, with a side
//! vector remembering insertion order for enumeration. The store is cheap
//! to clone; clones share the same data.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::record::{RecordKey, RecordKind, StoredRecord};
use crate::store::RecordStore;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<RecordKey, StoredRecord>,
    order: Vec<RecordKey>,
}

/// Thread-safe in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all kinds.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// Every stored record, in insertion order.
    pub fn snapshot(&self) -> Vec<StoredRecord> {
        let guard = self.inner.read();
        guard
            .order
            .iter()
            .filter_map(|key| guard.records.get(key).cloned())
            .collect()
    }
}

impl RecordStore for MemoryStore {
    fn create(&self, record: StoredRecord) -> Result<(), StoreError> {
        let key = record.key();
        let mut guard = self.inner.write();
        if guard.records.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                key: key.to_string(),
            });
        }
        guard.order.push(key.clone());
        guard.records.insert(key, record);
        Ok(())
    }

    fn get(&self, key: &RecordKey) -> Result<StoredRecord, StoreError> {
        self.inner
            .read()
            .records
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }

    fn replace(&self, record: StoredRecord) -> Result<StoredRecord, StoreError> {
        let key = record.key();
        let mut guard = self.inner.write();
        match guard.records.get_mut(&key) {
            Some(slot) => Ok(std::mem::replace(slot, record)),
            None => Err(StoreError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    fn remove(&self, key: &RecordKey) -> Result<StoredRecord, StoreError> {
        let mut guard = self.inner.write();
        let removed = guard
            .records
            .remove(key)
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })?;
        guard.order.retain(|k| k != key);
        Ok(removed)
    }

    fn keys(&self, kind: RecordKind) -> Result<Vec<RecordKey>, StoreError> {
        Ok(self
            .inner
            .read()
            .order
            .iter()
            .filter(|key| key.kind == kind)
            .cloned()
            .collect())
    }
}
