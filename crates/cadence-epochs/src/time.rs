//! Millisecond time primitives for epoch scheduling.
//!
//! Block time enters the tracker as a millisecond count supplied by the host;
//! durations are fixed millisecond spans. A "month" here is a fixed number of
//! days, never a calendar month. All arithmetic saturates instead of wrapping
//! so replicas cannot diverge on overflow behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

const MILLIS_PER_SEC: u64 = 1_000;
const MILLIS_PER_HOUR: u64 = 60 * 60 * MILLIS_PER_SEC;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// A block timestamp in milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp from milliseconds since the Unix epoch.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch.
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// The instant one `duration` later.
    pub const fn saturating_add(self, duration: EpochDuration) -> Self {
        Self(self.0.saturating_add(duration.millis()))
    }

    /// Elapsed span since `earlier`, or `None` if `earlier` is in the future.
    pub fn since(self, earlier: Timestamp) -> Option<EpochDuration> {
        self.0.checked_sub(earlier.0).map(EpochDuration::from_millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A fixed span of time separating nominal epoch boundaries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EpochDuration(u64);

impl EpochDuration {
    /// Create a duration from a millisecond count.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Create a duration from a second count.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(MILLIS_PER_SEC))
    }

    /// Create a duration from an hour count.
    pub const fn from_hours(hours: u64) -> Self {
        Self(hours.saturating_mul(MILLIS_PER_HOUR))
    }

    /// Create a duration from a day count.
    pub const fn from_days(days: u64) -> Self {
        Self(days.saturating_mul(MILLIS_PER_DAY))
    }

    /// The span in milliseconds.
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Whether the span is empty. Empty durations are rejected at record
    /// creation; a zero here only ever appears in unvalidated input.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for EpochDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
