use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{cash::Cash, display::Theme, game_time::GameTime, unit_resources::UnitResources};

pub const CONFIG_FILE: &str = "badcooker.json";
pub const DEFAULT_DB_FILE: &str = "games.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadCookerConfig {
    /// Database file. Relative paths are resolved against the data directory.
    pub db_path: PathBuf,
    /// Resources a newly created game starts with.
    pub starting_resources: UnitResources,
    pub theme: Theme,
}

impl Default for BadCookerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            starting_resources: UnitResources::default(),
            theme: Theme::default(),
        }
    }
}

impl BadCookerConfig {
    /// Load `badcooker.json` from the data directory.
    pub fn load(data_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.as_ref();
        let path = data_dir.join(CONFIG_FILE);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let mut config: BadCookerConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        let db_path = std::mem::take(&mut config.db_path);
        config.set_db_path(data_dir, db_path);
        log::debug!("config: loaded {}, db at {}", path.display(), config.db_path.display());
        Ok(config)
    }

    /// Relative `db_path` values are resolved against `data_dir`.
    pub fn set_db_path(&mut self, data_dir: impl AsRef<Path>, db_path: impl Into<PathBuf>) {
        let db_path = db_path.into();
        self.db_path = if db_path.is_relative() {
            data_dir.as_ref().join(db_path)
        } else {
            db_path
        };
    }

    /// Config with hardcoded defaults for use in tests.
    /// Games start with a full day and some cash to spend.
    pub fn default_test() -> Self {
        Self {
            db_path: PathBuf::from("test-games.json"),
            starting_resources: UnitResources::new(GameTime::FULL_DAY, Cash::new(100)),
            theme: Theme::default(),
        }
    }
}
