//! Canned seeds, genesis states, and block helpers.

use cadence_epochs::{BlockContext, EpochDuration, EpochSeed, GenesisState, Timestamp};

/// A daily schedule starting immediately.
pub fn daily_seed() -> EpochSeed {
    seed("daily", EpochDuration::from_days(1))
}

/// A weekly schedule starting immediately.
pub fn weekly_seed() -> EpochSeed {
    seed("weekly", EpochDuration::from_days(7))
}

/// A monthly (31 day) schedule starting immediately.
pub fn monthly_seed() -> EpochSeed {
    seed("monthly", EpochDuration::from_days(31))
}

/// The genesis state used by most lifecycle tests: daily, weekly, and
/// monthly schedules, all starting immediately.
pub fn default_genesis() -> GenesisState {
    GenesisState::new(vec![daily_seed(), weekly_seed(), monthly_seed()])
}

/// Shorthand for a block context from raw coordinates.
pub fn block(height: u64, millis: u64) -> BlockContext {
    BlockContext::new(height, Timestamp::from_millis(millis))
}

fn seed(identifier: &str, duration: EpochDuration) -> EpochSeed {
    EpochSeed {
        identifier: identifier.into(),
        duration,
        start_height: 1,
        start_time: None,
    }
}
