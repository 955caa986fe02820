//! Shared primitive types and constants used across the crate.

/// Length of one in-game day, in game-time units.
pub const DAILY_TIME: i64 = 1000;

/// Lowest representable game time. Anything below zero is tiredness.
pub const TIME_FLOOR: i64 = -DAILY_TIME / 2;

/// Highest representable game time. Addition saturates here.
pub const TIME_CEILING: i64 = DAILY_TIME;

/// Position of a game inside the persisted collection.
/// Games carry no other identity.
pub type GameIndex = usize;
