//! Record lifecycle and the per-block evaluation pass.

use crate::error::{EpochError, Result};
use crate::events::TransitionEvent;
use crate::record::{BlockContext, EpochId, EpochRecord, EpochSeed};
use crate::store::{EpochStore, MemoryStore};
use tracing::{debug, info};

/// Tracks every registered epoch schedule and advances them block by block.
///
/// The tracker owns its store exclusively: nothing else writes records, and
/// readers only ever receive cloned snapshots. Given identical stored state
/// and an identical [`BlockContext`], every operation produces identical
/// results on every replica.
#[derive(Debug)]
pub struct EpochTracker<S: EpochStore> {
    store: S,
}

impl EpochTracker<MemoryStore> {
    /// Create a tracker over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: EpochStore> EpochTracker<S> {
    /// Create a tracker over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new epoch schedule.
    ///
    /// The seed's unset start time resolves to `block.time`, meaning counting
    /// begins immediately. No transition fires as part of creation; the first
    /// [`evaluate`](Self::evaluate) at or after the start time does that.
    pub fn create(&mut self, block: &BlockContext, seed: EpochSeed) -> Result<EpochRecord> {
        seed.validate()?;
        if self.store.get(&seed.identifier)?.is_some() {
            return Err(EpochError::duplicate_identifier(seed.identifier.as_str()));
        }

        let record = EpochRecord::from_seed(seed, block);
        debug!(
            identifier = %record.identifier,
            duration = %record.duration,
            start_time = %record.start_time,
            "created epoch record"
        );
        self.store.set(record.clone())?;
        Ok(record)
    }

    /// Advance every record against the current block.
    ///
    /// Records are visited in the store's stable order and the returned
    /// events preserve it. Each record moves by at most one transition per
    /// call, so downstream consumers see at most one event per record per
    /// block.
    pub fn evaluate(&mut self, block: &BlockContext) -> Result<Vec<TransitionEvent>> {
        let mut events = Vec::new();
        for mut record in self.store.list()? {
            let Some(kind) = record.advance(block) else {
                continue;
            };
            info!(
                identifier = %record.identifier,
                epoch = record.current_epoch,
                kind = %kind,
                height = block.height,
                "epoch transition"
            );
            events.push(TransitionEvent {
                identifier: record.identifier.clone(),
                kind,
                epoch: record.current_epoch,
            });
            self.store.set(record)?;
        }
        Ok(events)
    }

    /// Snapshot the record stored under `identifier`.
    pub fn get(&self, identifier: &EpochId) -> Result<EpochRecord> {
        self.store
            .get(identifier)?
            .ok_or_else(|| EpochError::not_found(identifier.as_str()))
    }

    /// Snapshot every record, in stable store order.
    pub fn list(&self) -> Result<Vec<EpochRecord>> {
        self.store.list()
    }

    /// Remove the record stored under `identifier`. Irreversible.
    pub fn remove(&mut self, identifier: &EpochId) -> Result<()> {
        if !self.store.remove(identifier)? {
            return Err(EpochError::not_found(identifier.as_str()));
        }
        debug!(identifier = %identifier, "removed epoch record");
        Ok(())
    }
}
