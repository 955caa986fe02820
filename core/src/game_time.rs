//! Game time — the remaining time budget of a player's game day.
//!
//! Values live in `[TIME_FLOOR, TIME_CEILING]`. Negative values are
//! tiredness: the player has worked past the end of the day.
//!
//! Every operation returns a new value. A negative delta is redirected to
//! the complementary operation with the delta's magnitude, so `add(-30)`
//! is exactly `subtract(30)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    display::{ResourceDisplay, ResourceKind, Theme},
    error::{ResourceError, ResourceResult},
    types::{DAILY_TIME, TIME_CEILING, TIME_FLOOR},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct GameTime(i64);

impl GameTime {
    /// A fresh, full day.
    pub const FULL_DAY: GameTime = GameTime(TIME_CEILING);

    pub fn new(value: i64) -> ResourceResult<Self> {
        if !(TIME_FLOOR..=TIME_CEILING).contains(&value) {
            return Err(ResourceError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Adds time to the day, saturating at `TIME_CEILING`.
    /// Only a negative delta can fail, since it is a subtraction.
    pub fn add(self, delta: i64) -> ResourceResult<Self> {
        if delta < 0 {
            return self.consume(delta.unsigned_abs());
        }
        Ok(self.extend(delta.unsigned_abs()))
    }

    /// Takes time from the day. Fails rather than dropping below `TIME_FLOOR`.
    pub fn subtract(self, delta: i64) -> ResourceResult<Self> {
        if delta < 0 {
            return Ok(self.extend(delta.unsigned_abs()));
        }
        self.consume(delta.unsigned_abs())
    }

    /// Mirrors the value around zero. Anything above half a day has no
    /// representable mirror.
    pub fn negate(self) -> ResourceResult<Self> {
        if self.0 > DAILY_TIME / 2 {
            return Err(ResourceError::TimeDeficit {
                current:   self.0,
                requested: self.0.unsigned_abs(),
            });
        }
        Self::new(-self.0)
    }

    pub fn tiredness(self) -> Option<i64> {
        if self.0 >= 0 {
            None
        } else {
            Some(-self.0)
        }
    }

    pub fn is_tired(self) -> bool {
        self.0 < 0
    }

    pub fn display(self) -> ResourceDisplay {
        ResourceDisplay {
            kind:    ResourceKind::Time,
            amount:  self.0,
            flagged: self.is_tired(),
        }
    }

    pub fn render(self) -> String {
        self.render_with(&Theme::default())
    }

    pub fn render_with(self, theme: &Theme) -> String {
        theme.render(&self.display())
    }

    fn extend(self, by: u64) -> Self {
        let by = i64::try_from(by).unwrap_or(i64::MAX);
        // Result is >= self and capped at the ceiling, so always in range.
        Self(self.0.saturating_add(by).min(TIME_CEILING))
    }

    fn consume(self, by: u64) -> ResourceResult<Self> {
        let headroom = self.0.abs_diff(TIME_FLOOR);
        if headroom < by {
            return Err(ResourceError::TimeDeficit { current: self.0, requested: by });
        }
        // headroom is at most DAILY_TIME * 3 / 2, so the cast is lossless.
        Self::new(TIME_FLOOR + (headroom - by) as i64)
    }
}

impl Default for GameTime {
    fn default() -> Self {
        Self::FULL_DAY
    }
}

impl TryFrom<i64> for GameTime {
    type Error = ResourceError;

    fn try_from(value: i64) -> ResourceResult<Self> {
        Self::new(value)
    }
}

impl From<GameTime> for i64 {
    fn from(time: GameTime) -> i64 {
        time.0
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
