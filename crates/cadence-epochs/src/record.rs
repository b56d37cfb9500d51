//! Epoch records and the per-block transition rule.
//!
//! An [`EpochRecord`] tracks one independently-configured recurring time
//! window. The whole state machine is [`EpochRecord::advance`]: a pure
//! function of the stored record and the current block coordinates, with no
//! other inputs. Evaluating the same record against the same block twice is a
//! no-op, which is what makes replay across replicas safe.
//!
//! # Boundary arithmetic
//!
//! Boundaries are computed from the schedule, never from observed block time:
//! the first start pins the window origin to the configured reference instant,
//! and every rollover advances it by exactly one duration. Block production
//! cadence therefore cannot drift, skip, or double-fire a schedule. When
//! several boundaries have elapsed between evaluations, each evaluation
//! consumes exactly one; the record catches up one epoch per block.

use crate::error::{EpochError, Result};
use crate::events::TransitionKind;
use crate::time::{EpochDuration, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique name of a tracked epoch schedule (e.g. `"monthly"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EpochId(String);

impl EpochId {
    /// Create an identifier from any string-like value.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EpochId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpochId {
    fn from(identifier: &str) -> Self {
        Self(identifier.to_owned())
    }
}

impl From<String> for EpochId {
    fn from(identifier: String) -> Self {
        Self(identifier)
    }
}

/// Host-supplied coordinates of the block being processed.
///
/// The host guarantees strictly increasing heights and non-decreasing times
/// across evaluations; the tracker assumes but does not enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    /// Height of the current block.
    pub height: u64,
    /// Time of the current block.
    pub time: Timestamp,
}

impl BlockContext {
    /// Create a block context.
    pub const fn new(height: u64, time: Timestamp) -> Self {
        Self { height, time }
    }
}

/// Creation payload for a new epoch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochSeed {
    /// Unique key for the new record.
    pub identifier: EpochId,
    /// Nominal period between boundaries. Must be positive.
    pub duration: EpochDuration,
    /// Height recorded as the origin of the schedule.
    pub start_height: u64,
    /// Reference instant at which counting begins. `None` means "begin at the
    /// block time observed when the record is created".
    pub start_time: Option<Timestamp>,
}

impl EpochSeed {
    /// Check the seed against the creation rules.
    pub fn validate(&self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(EpochError::invalid_identifier("identifier must not be empty"));
        }
        if self.duration.is_zero() {
            return Err(EpochError::invalid_duration(self.duration.millis()));
        }
        Ok(())
    }
}

/// Persisted state of one epoch schedule.
///
/// Owned exclusively by the tracker; external readers only ever see cloned
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochRecord {
    /// Unique key of this record.
    pub identifier: EpochId,
    /// Nominal period between boundaries. Never mutated after creation.
    pub duration: EpochDuration,
    /// Height recorded when the record was created.
    pub start_height: u64,
    /// Reference instant the schedule counts from.
    pub start_time: Timestamp,
    /// Number of the running epoch; 0 until counting starts.
    pub current_epoch: u64,
    /// Height recorded at the most recent transition. The first start leaves
    /// this at the creation height; rollovers stamp the triggering height.
    pub current_epoch_start_height: u64,
    /// Nominal instant the running epoch began; `None` until the first start,
    /// thereafter always `start_time` plus a whole number of durations.
    pub current_epoch_start_time: Option<Timestamp>,
    /// Latched to `true` by the first start; never reverts.
    pub counting_started: bool,
}

impl EpochRecord {
    /// Build the stored form of a validated seed, resolving the unset start
    /// time against the block the record is created in.
    pub(crate) fn from_seed(seed: EpochSeed, block: &BlockContext) -> Self {
        let start_time = seed.start_time.unwrap_or(block.time);
        Self {
            identifier: seed.identifier,
            duration: seed.duration,
            start_height: seed.start_height,
            start_time,
            current_epoch: 0,
            current_epoch_start_height: seed.start_height,
            current_epoch_start_time: None,
            counting_started: false,
        }
    }

    /// Nominal end of the running epoch window, if counting has started.
    pub fn next_boundary(&self) -> Option<Timestamp> {
        self.current_epoch_start_time
            .map(|window_start| window_start.saturating_add(self.duration))
    }

    /// Apply one block to this record.
    ///
    /// Returns the transition that fired, if any. At most one boundary is
    /// consumed per call: a record that is several periods behind advances a
    /// single epoch now and the rest on subsequent blocks.
    pub(crate) fn advance(&mut self, block: &BlockContext) -> Option<TransitionKind> {
        if !self.counting_started {
            if block.time < self.start_time {
                return None;
            }
            // First start: the window origin is the configured reference
            // instant, and the origin height stays the creation height.
            self.current_epoch = 1;
            self.counting_started = true;
            self.current_epoch_start_time = Some(self.start_time);
            return Some(TransitionKind::Started);
        }

        let Some(window_start) = self.current_epoch_start_time else {
            // Unreachable once counting has started.
            return None;
        };
        let boundary = window_start.saturating_add(self.duration);
        if block.time < boundary {
            return None;
        }

        // Rollover: the window advances on the nominal schedule while the
        // height records the block that actually triggered it.
        self.current_epoch = self.current_epoch.saturating_add(1);
        self.current_epoch_start_time = Some(boundary);
        self.current_epoch_start_height = block.height;
        Some(TransitionKind::RolledOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(height: u64, millis: u64) -> BlockContext {
        BlockContext::new(height, Timestamp::from_millis(millis))
    }

    fn monthly_record(start_time: Option<Timestamp>, created_at: &BlockContext) -> EpochRecord {
        let seed = EpochSeed {
            identifier: "monthly".into(),
            duration: EpochDuration::from_days(31),
            start_height: created_at.height,
            start_time,
        };
        EpochRecord::from_seed(seed, created_at)
    }

    #[test]
    fn test_seed_resolution_uses_block_time() {
        let created_at = block(1, 5_000);
        let record = monthly_record(None, &created_at);
        assert_eq!(record.start_time, Timestamp::from_millis(5_000));
        assert_eq!(record.current_epoch, 0);
        assert_eq!(record.current_epoch_start_time, None);
        assert!(!record.counting_started);
    }

    #[test]
    fn test_seed_resolution_keeps_explicit_time() {
        let created_at = block(1, 5_000);
        let record = monthly_record(Some(Timestamp::from_millis(9_000)), &created_at);
        assert_eq!(record.start_time, Timestamp::from_millis(9_000));
    }

    #[test]
    fn test_no_start_before_reference_instant() {
        let created_at = block(1, 0);
        let future = Timestamp::from_millis(EpochDuration::from_days(30).millis());
        let mut record = monthly_record(Some(future), &created_at);

        // Height advances alone never start counting.
        assert_eq!(record.advance(&block(50, 1_000)), None);
        assert_eq!(record.current_epoch, 0);
        assert!(!record.counting_started);
        assert_eq!(record.current_epoch_start_time, None);
    }

    #[test]
    fn test_first_start_pins_origin() {
        let created_at = block(1, 0);
        let start = Timestamp::from_millis(EpochDuration::from_days(30).millis());
        let mut record = monthly_record(Some(start), &created_at);

        // Observed late, at a much higher block.
        let observed = block(77, EpochDuration::from_days(45).millis());
        assert_eq!(record.advance(&observed), Some(TransitionKind::Started));
        assert_eq!(record.current_epoch, 1);
        assert!(record.counting_started);
        // The window origin is the reference instant, not the observed time,
        // and the origin height is still the creation height.
        assert_eq!(record.current_epoch_start_time, Some(start));
        assert_eq!(record.current_epoch_start_height, 1);
    }

    #[test]
    fn test_first_start_fires_at_exact_instant() {
        let created_at = block(1, 0);
        let start = Timestamp::from_millis(10_000);
        let mut record = monthly_record(Some(start), &created_at);
        assert_eq!(
            record.advance(&block(2, 10_000)),
            Some(TransitionKind::Started)
        );
    }

    #[test]
    fn test_rollover_is_schedule_locked() {
        let created_at = block(1, 0);
        let mut record = monthly_record(None, &created_at);
        assert_eq!(record.advance(&created_at), Some(TransitionKind::Started));

        let month = EpochDuration::from_days(31);

        // Within the window nothing happens.
        assert_eq!(record.advance(&block(2, 1_000)), None);
        assert_eq!(record.current_epoch, 1);

        // Evaluated a day late: the window still advances by exactly one
        // duration while the height records the triggering block.
        let late = block(3, EpochDuration::from_days(32).millis());
        assert_eq!(record.advance(&late), Some(TransitionKind::RolledOver));
        assert_eq!(record.current_epoch, 2);
        assert_eq!(
            record.current_epoch_start_time,
            Some(Timestamp::from_millis(month.millis()))
        );
        assert_eq!(record.current_epoch_start_height, 3);
    }

    #[test]
    fn test_rollover_fires_on_boundary_block() {
        let created_at = block(1, 0);
        let mut record = monthly_record(None, &created_at);
        record.advance(&created_at);

        let boundary = EpochDuration::from_days(31).millis();
        assert_eq!(
            record.advance(&block(2, boundary)),
            Some(TransitionKind::RolledOver)
        );
        assert_eq!(record.current_epoch, 2);
    }

    #[test]
    fn test_one_boundary_per_call() {
        let created_at = block(1, 0);
        let mut record = monthly_record(None, &created_at);
        record.advance(&created_at);

        // Three full periods elapse unobserved.
        let far = block(9, EpochDuration::from_days(96).millis());
        assert_eq!(record.advance(&far), Some(TransitionKind::RolledOver));
        assert_eq!(record.current_epoch, 2);

        // Catching up takes one call per missed boundary.
        assert_eq!(record.advance(&far), Some(TransitionKind::RolledOver));
        assert_eq!(record.advance(&far), Some(TransitionKind::RolledOver));
        assert_eq!(record.current_epoch, 4);

        // Caught up: the next window ends at day 124, past the block time.
        assert_eq!(record.advance(&far), None);
        assert_eq!(record.current_epoch, 4);
    }

    #[test]
    fn test_replaying_a_block_is_a_noop() {
        let created_at = block(1, 0);
        let mut record = monthly_record(None, &created_at);
        record.advance(&created_at);
        let late = block(3, EpochDuration::from_days(32).millis());
        record.advance(&late);

        // The state has absorbed the transition; the same block again
        // changes nothing.
        let snapshot = record.clone();
        assert_eq!(record.advance(&late), None);
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_seed_validation() {
        let seed = EpochSeed {
            identifier: "".into(),
            duration: EpochDuration::from_days(1),
            start_height: 1,
            start_time: None,
        };
        assert!(matches!(
            seed.validate(),
            Err(EpochError::InvalidIdentifier { .. })
        ));

        let seed = EpochSeed {
            identifier: "daily".into(),
            duration: EpochDuration::from_millis(0),
            start_height: 1,
            start_time: None,
        };
        assert!(matches!(
            seed.validate(),
            Err(EpochError::InvalidDuration { duration_ms: 0 })
        ));
    }
}
