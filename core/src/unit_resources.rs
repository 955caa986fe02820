//! The resources a player spends each turn: time and cash.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    cash::{Cash, DebtPolicy},
    display::Theme,
    error::ResourceResult,
    game_time::GameTime,
};

pub const RENDER_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitResources {
    pub time: GameTime,
    pub cash: Cash,
}

impl UnitResources {
    pub fn new(time: GameTime, cash: Cash) -> Self {
        Self { time, cash }
    }

    // Each helper returns a replacement bundle; on error `self` is untouched.

    pub fn spend_cash(self, value: i64, policy: DebtPolicy) -> ResourceResult<Self> {
        Ok(Self { cash: self.cash.spend_with(value, policy)?, ..self })
    }

    pub fn earn_cash(self, value: i64) -> ResourceResult<Self> {
        Ok(Self { cash: self.cash.add(value)?, ..self })
    }

    pub fn spend_time(self, delta: i64) -> ResourceResult<Self> {
        Ok(Self { time: self.time.subtract(delta)?, ..self })
    }

    pub fn add_time(self, delta: i64) -> ResourceResult<Self> {
        Ok(Self { time: self.time.add(delta)?, ..self })
    }

    pub fn render(&self) -> String {
        self.render_with(&Theme::default())
    }

    /// Time first, then cash.
    pub fn render_with(&self, theme: &Theme) -> String {
        [self.time.render_with(theme), self.cash.render_with(theme)].join(RENDER_SEPARATOR)
    }
}

impl fmt::Display for UnitResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
