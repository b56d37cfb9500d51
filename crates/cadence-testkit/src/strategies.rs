//! Property test strategies for cadence types.
//!
//! All strategies derive their values from bounded integer seeds, so shrunk
//! counterexamples stay readable and every run is reproducible from the
//! proptest seed alone.

use cadence_epochs::{BlockContext, EpochDuration, EpochId, EpochSeed, Timestamp};
use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

const DAY_MS: u64 = EpochDuration::from_days(1).millis();

/// Strategy for generating epoch identifiers.
///
/// Identifiers come from a bounded pool so that generated sets occasionally
/// collide, which exercises the duplicate-identifier paths.
///
/// # Example
///
/// ```rust
/// use cadence_testkit::strategies::arb_epoch_id;
/// use proptest::prelude::*;
///
/// proptest! {
///     #[test]
///     fn test_identifier_is_never_empty(identifier in arb_epoch_id()) {
///         prop_assert!(!identifier.is_empty());
///     }
/// }
/// ```
pub fn arb_epoch_id() -> impl Strategy<Value = EpochId> {
    (0u64..50).prop_map(|seed| EpochId::new(format!("epoch-{seed}")))
}

/// Strategy for generating positive epoch durations, from sub-second spans
/// up to a quarter year.
pub fn arb_duration() -> impl Strategy<Value = EpochDuration> {
    prop_oneof![
        (1u64..10 * DAY_MS).prop_map(EpochDuration::from_millis),
        (1u64..=90).prop_map(EpochDuration::from_days),
    ]
}

/// Strategy for generating block timestamps within the first hundred days.
pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    (0u64..100 * DAY_MS).prop_map(Timestamp::from_millis)
}

/// Strategy for generating creation payloads, with and without an explicit
/// start time.
pub fn arb_seed() -> impl Strategy<Value = EpochSeed> {
    (
        arb_epoch_id(),
        arb_duration(),
        1u64..1_000,
        prop::option::of(arb_timestamp()),
    )
        .prop_map(|(identifier, duration, start_height, start_time)| EpochSeed {
            identifier,
            duration,
            start_height,
            start_time,
        })
}

/// Strategy for generating a block walk: a sequence of block contexts with
/// strictly increasing heights and non-decreasing times, the ordering the
/// host guarantees.
pub fn arb_block_walk() -> impl Strategy<Value = Vec<BlockContext>> {
    (
        1u64..100,
        0u64..10 * DAY_MS,
        prop::collection::vec((1u64..=3, 0u64..=40 * DAY_MS), 1..32),
    )
        .prop_map(|(start_height, start_millis, steps)| {
            let mut height = start_height;
            let mut millis = start_millis;
            let mut walk = Vec::with_capacity(steps.len() + 1);
            walk.push(BlockContext::new(height, Timestamp::from_millis(millis)));
            for (height_step, millis_step) in steps {
                height = height.saturating_add(height_step);
                millis = millis.saturating_add(millis_step);
                walk.push(BlockContext::new(height, Timestamp::from_millis(millis)));
            }
            walk
        })
}
