//! Presentation of resource values.
//!
//! Value types only expose a `ResourceDisplay` payload: the signed amount and
//! whether it sits in its flagged state (tired time, cash in debt). A `Theme`
//! turns that payload into rich-text markup for the terminal front end.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Time,
    Cash,
}

/// Everything a formatter needs to present one resource value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceDisplay {
    pub kind:    ResourceKind,
    pub amount:  i64,
    /// Tired for time, in debt for cash.
    pub flagged: bool,
}

/// Colour and icon mapping applied on top of a `ResourceDisplay`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    pub time_color:  String,
    pub tired_color: String,
    pub cash_color:  String,
    pub debt_color:  String,
    pub time_icon:   String,
    pub cash_icon:   String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            time_color:  "black".into(),
            tired_color: "magenta".into(),
            cash_color:  "yellow".into(),
            debt_color:  "magenta".into(),
            time_icon:   ":clock:".into(),
            cash_icon:   ":coin:".into(),
        }
    }
}

impl Theme {
    pub fn color_for(&self, display: &ResourceDisplay) -> &str {
        match (display.kind, display.flagged) {
            (ResourceKind::Time, false) => &self.time_color,
            (ResourceKind::Time, true)  => &self.tired_color,
            (ResourceKind::Cash, false) => &self.cash_color,
            (ResourceKind::Cash, true)  => &self.debt_color,
        }
    }

    pub fn icon_for(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Time => &self.time_icon,
            ResourceKind::Cash => &self.cash_icon,
        }
    }

    /// `[bold <color>]<amount>[/] <icon>`
    pub fn render(&self, display: &ResourceDisplay) -> String {
        format!(
            "[bold {}]{}[/] {}",
            self.color_for(display),
            display.amount,
            self.icon_for(display.kind),
        )
    }
}
