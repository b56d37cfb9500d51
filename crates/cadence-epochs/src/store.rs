//! Keyed record storage consumed by the tracker.
//!
//! The tracker treats its store as a simple keyed map with durable writes;
//! persistence itself belongs to the host. Implementations must return
//! records in a stable order from [`EpochStore::list`], since that order is
//! the order evaluation visits records and emits events.

use crate::error::Result;
use crate::record::{EpochId, EpochRecord};
use std::collections::BTreeMap;

/// A keyed map of epoch records with durable, crash-consistent writes.
///
/// All operations are synchronous. Store faults are reported through
/// [`EpochError::Storage`], never masked.
///
/// [`EpochError::Storage`]: crate::error::EpochError::Storage
pub trait EpochStore {
    /// Fetch the record stored under `identifier`, if any.
    fn get(&self, identifier: &EpochId) -> Result<Option<EpochRecord>>;

    /// Write `record` under its identifier, replacing any previous value.
    fn set(&mut self, record: EpochRecord) -> Result<()>;

    /// Remove the record stored under `identifier`, reporting whether it was
    /// present.
    fn remove(&mut self, identifier: &EpochId) -> Result<bool>;

    /// Snapshot every stored record, in stable iteration order.
    fn list(&self) -> Result<Vec<EpochRecord>>;
}

/// In-memory reference store.
///
/// Backed by a `BTreeMap` so iteration order is identifier order, which keeps
/// every evaluation pass deterministic across replicas.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<EpochId, EpochRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EpochStore for MemoryStore {
    fn get(&self, identifier: &EpochId) -> Result<Option<EpochRecord>> {
        Ok(self.records.get(identifier).cloned())
    }

    fn set(&mut self, record: EpochRecord) -> Result<()> {
        self.records.insert(record.identifier.clone(), record);
        Ok(())
    }

    fn remove(&mut self, identifier: &EpochId) -> Result<bool> {
        Ok(self.records.remove(identifier).is_some())
    }

    fn list(&self) -> Result<Vec<EpochRecord>> {
        Ok(self.records.values().cloned().collect())
    }
}
