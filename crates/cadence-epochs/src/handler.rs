//! Administrative message dispatch.
//!
//! The host's router maps transaction kinds to handler functions; on this
//! side that reduces to a closed enum and one `match`. Schedules change only
//! through these messages, the per-block evaluation never does.

use crate::error::Result;
use crate::record::{BlockContext, EpochId, EpochRecord, EpochSeed};
use crate::store::EpochStore;
use crate::tracker::EpochTracker;
use serde::{Deserialize, Serialize};

/// Administrative actions routed to the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpochMessage {
    /// Register a new epoch schedule.
    AddEpoch(EpochSeed),
    /// Remove an existing schedule irreversibly.
    RemoveEpoch {
        /// Identifier of the record to remove.
        identifier: EpochId,
    },
}

/// Result of dispatching one [`EpochMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpochOutcome {
    /// A record was created.
    Added(EpochRecord),
    /// A record was removed.
    Removed {
        /// Identifier of the removed record.
        identifier: EpochId,
    },
}

/// Dispatch `message` against the tracker.
pub fn handle<S: EpochStore>(
    tracker: &mut EpochTracker<S>,
    block: &BlockContext,
    message: EpochMessage,
) -> Result<EpochOutcome> {
    match message {
        EpochMessage::AddEpoch(seed) => {
            let record = tracker.create(block, seed)?;
            Ok(EpochOutcome::Added(record))
        }
        EpochMessage::RemoveEpoch { identifier } => {
            tracker.remove(&identifier)?;
            Ok(EpochOutcome::Removed { identifier })
        }
    }
}
