//! Genesis payload: declaring epoch schedules at chain birth.
//!
//! The genesis exchange is declarative: it carries the schedules to register,
//! not mid-flight counters. Live record state survives restarts through the
//! durable store, so an exported state reproduces the schedule declarations
//! (with every unset start time already resolved) rather than a running
//! snapshot.

use crate::error::{EpochError, Result};
use crate::record::{BlockContext, EpochSeed};
use crate::store::EpochStore;
use crate::tracker::EpochTracker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Initial set of epoch schedules, applied before the first evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Schedules to register, in declaration order.
    pub epochs: Vec<EpochSeed>,
}

impl GenesisState {
    /// Create a genesis state from a list of seeds.
    pub fn new(epochs: Vec<EpochSeed>) -> Self {
        Self { epochs }
    }

    /// Check every seed and reject duplicate identifiers before any record
    /// is created.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for seed in &self.epochs {
            seed.validate()?;
            if !seen.insert(seed.identifier.clone()) {
                return Err(EpochError::duplicate_identifier(seed.identifier.as_str()));
            }
        }
        Ok(())
    }
}

/// Register every schedule in `state`, in declaration order.
///
/// Must run before any [`EpochTracker::evaluate`] call for `block`; creation
/// itself never fires a transition.
pub fn init_genesis<S: EpochStore>(
    tracker: &mut EpochTracker<S>,
    block: &BlockContext,
    state: GenesisState,
) -> Result<()> {
    state.validate()?;
    for seed in state.epochs {
        tracker.create(block, seed)?;
    }
    Ok(())
}

/// Reproduce the schedule declarations from live records.
pub fn export_genesis<S: EpochStore>(tracker: &EpochTracker<S>) -> Result<GenesisState> {
    let epochs = tracker
        .list()?
        .into_iter()
        .map(|record| EpochSeed {
            identifier: record.identifier,
            duration: record.duration,
            start_height: record.start_height,
            start_time: Some(record.start_time),
        })
        .collect();
    Ok(GenesisState { epochs })
}
