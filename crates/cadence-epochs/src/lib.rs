//! # Cadence Epochs
//!
//! **Purpose**: Deterministic epoch tracking for a replicated state machine.
//!
//! The host re-evaluates the tracker once per block. Each registered record
//! describes a recurring time window ("epoch") with a fixed duration; the
//! tracker advances every record against the block's (height, time) pair and
//! reports which ones started or rolled over. Outputs become consensus
//! state, so everything here is a pure function of stored state and the
//! block context: no wall clocks, no randomness, no async.
//!
//! ## Core Concepts
//!
//! - **Record**: one schedule per identifier, persisted through a keyed
//!   [`store::EpochStore`].
//! - **Boundary**: the nominal instant a window ends, computed purely from
//!   schedule arithmetic, never from observed block time.
//! - **First start**: the one-time transition from "not yet counting" to
//!   epoch 1, pinned to the configured reference instant.
//! - **Rollover**: each later transition; schedule-locked in time, stamped
//!   with the triggering block height. At most one fires per record per
//!   block, even when several boundaries have elapsed.
//!
//! ## What's NOT in this crate
//!
//! - Persistent storage (the host supplies a durable [`store::EpochStore`];
//!   [`store::MemoryStore`] is the reference implementation)
//! - Reactions to transitions (downstream modules consume the returned
//!   [`events::TransitionEvent`]s)
//! - Async execution (evaluation is synchronous and strictly sequential)
//!
//! ```
//! use cadence_epochs::{BlockContext, EpochDuration, EpochSeed, EpochTracker, Timestamp};
//!
//! let mut tracker = EpochTracker::in_memory();
//! let genesis = BlockContext::new(1, Timestamp::from_millis(0));
//! tracker
//!     .create(
//!         &genesis,
//!         EpochSeed {
//!             identifier: "daily".into(),
//!             duration: EpochDuration::from_days(1),
//!             start_height: 1,
//!             start_time: None,
//!         },
//!     )
//!     .unwrap();
//!
//! // The first evaluation at or after the reference instant starts epoch 1.
//! let events = tracker.evaluate(&genesis).unwrap();
//! assert_eq!(events.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Unified error handling
pub mod error;

/// Transition events emitted per block
pub mod events;

/// Genesis payload and validation
pub mod genesis;

/// Administrative message dispatch
pub mod handler;

/// Epoch records and the transition rule
pub mod record;

/// Canonical DAG-CBOR encoding
pub mod serialization;

/// Keyed record storage
pub mod store;

/// Millisecond time primitives
pub mod time;

/// Record lifecycle and per-block evaluation
pub mod tracker;

pub use error::{EpochError, Result};
pub use events::{TransitionEvent, TransitionKind};
pub use genesis::{export_genesis, init_genesis, GenesisState};
pub use handler::{handle, EpochMessage, EpochOutcome};
pub use record::{BlockContext, EpochId, EpochRecord, EpochSeed};
pub use store::{EpochStore, MemoryStore};
pub use time::{EpochDuration, Timestamp};
pub use tracker::EpochTracker;
