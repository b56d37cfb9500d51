//! Transition events emitted by per-block evaluation.
//!
//! The event sequence returned from [`EpochTracker::evaluate`] is the sole
//! signal surface for downstream modules reacting to epoch boundaries.
//! Consumers may rely on at most one event per record per block.
//!
//! [`EpochTracker::evaluate`]: crate::tracker::EpochTracker::evaluate

use crate::record::EpochId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of boundary a record crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// The one-time transition from "not yet counting" to epoch 1.
    Started,
    /// A subsequent transition to the next numbered epoch.
    RolledOver,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKind::Started => write!(f, "started"),
            TransitionKind::RolledOver => write!(f, "rolled_over"),
        }
    }
}

/// Notification that a record changed during one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// The record that transitioned.
    pub identifier: EpochId,
    /// Whether this was the first start or a rollover.
    pub kind: TransitionKind,
    /// The epoch number that just began.
    pub epoch: u64,
}
