//! Cash — a player's currency balance.
//!
//! Any integer is a valid balance, including a negative one (debts).
//! The deficit rule applies to spending only: a spend that would take the
//! balance below zero fails unless the caller opts into `DebtPolicy::Allow`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    display::{ResourceDisplay, ResourceKind, Theme},
    error::{ResourceError, ResourceResult},
};

/// Whether a spend may leave the balance negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtPolicy {
    #[default]
    Forbid,
    Allow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Cash(i64);

impl Cash {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Strict spend: fails with `CashDeficit` on insufficient funds.
    pub fn spend(self, value: i64) -> ResourceResult<Self> {
        self.spend_with(value, DebtPolicy::Forbid)
    }

    /// A negative `value` is income and never fails.
    pub fn spend_with(self, value: i64, policy: DebtPolicy) -> ResourceResult<Self> {
        if value < 0 {
            return Ok(self.deposit(value.unsigned_abs()));
        }
        self.withdraw(value.unsigned_abs(), policy)
    }

    /// Adding a negative amount is a strict spend of its magnitude.
    pub fn add(self, value: i64) -> ResourceResult<Self> {
        if value < 0 {
            return self.withdraw(value.unsigned_abs(), DebtPolicy::Forbid);
        }
        Ok(self.deposit(value.unsigned_abs()))
    }

    pub fn debts(self) -> Option<i64> {
        if self.0 >= 0 {
            None
        } else {
            Some(self.0.saturating_neg())
        }
    }

    pub fn in_debt(self) -> bool {
        self.0 < 0
    }

    pub fn display(self) -> ResourceDisplay {
        ResourceDisplay {
            kind:    ResourceKind::Cash,
            amount:  self.0,
            flagged: self.in_debt(),
        }
    }

    pub fn render(self) -> String {
        self.render_with(&Theme::default())
    }

    pub fn render_with(self, theme: &Theme) -> String {
        theme.render(&self.display())
    }

    fn deposit(self, by: u64) -> Self {
        Self(self.0.saturating_add_unsigned(by))
    }

    fn withdraw(self, by: u64, policy: DebtPolicy) -> ResourceResult<Self> {
        let remaining = self.0.saturating_sub_unsigned(by);
        if policy == DebtPolicy::Forbid && remaining < 0 {
            return Err(ResourceError::CashDeficit { balance: self.0, requested: by });
        }
        Ok(Self(remaining))
    }
}

impl From<i64> for Cash {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Cash> for i64 {
    fn from(cash: Cash) -> i64 {
        cash.0
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
