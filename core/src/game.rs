//! Persisted game records.
//!
//! A `Game` is identified only by its position in `BadCookerData::games`.

use serde::{Deserialize, Serialize};

use crate::{types::GameIndex, unit_resources::UnitResources};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub unit_resources: UnitResources,
}

impl Game {
    pub fn new(unit_resources: UnitResources) -> Self {
        Self { unit_resources }
    }
}

/// Everything stored in one database file, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadCookerData {
    pub games: Vec<Game>,
}

impl BadCookerData {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn game(&self, index: GameIndex) -> Option<&Game> {
        self.games.get(index)
    }

    pub fn game_mut(&mut self, index: GameIndex) -> Option<&mut Game> {
        self.games.get_mut(index)
    }

    /// Appends a game and returns its index.
    pub fn push(&mut self, game: Game) -> GameIndex {
        self.games.push(game);
        self.games.len() - 1
    }
}
