//! Configuration loading.

use badcooker_core::{
    config::{BadCookerConfig, CONFIG_FILE, DEFAULT_DB_FILE},
    display::Theme,
    Cash, GameTime,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults_start_a_full_day_with_no_cash() {
    let config = BadCookerConfig::default();
    assert_eq!(config.db_path.to_str(), Some(DEFAULT_DB_FILE));
    assert_eq!(config.starting_resources.time, GameTime::FULL_DAY);
    assert_eq!(config.starting_resources.cash, Cash::new(0));
    assert_eq!(config.theme, Theme::default());
}

#[test]
fn partial_file_fills_in_defaults_and_resolves_db_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{ "starting_resources": { "time": 800, "cash": 250 }, "theme": { "cash_color": "green" } }"#,
    )
    .unwrap();

    let config = BadCookerConfig::load(dir.path()).unwrap();
    assert_eq!(config.db_path, dir.path().join(DEFAULT_DB_FILE));
    assert_eq!(config.starting_resources.time.value(), 800);
    assert_eq!(config.starting_resources.cash.value(), 250);
    assert_eq!(config.theme.cash_color, "green");
    assert_eq!(config.theme.debt_color, "magenta");
}

#[test]
fn invalid_starting_time_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{ "starting_resources": { "time": 1500, "cash": 0 } }"#,
    )
    .unwrap();

    assert!(BadCookerConfig::load(dir.path()).is_err());
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = BadCookerConfig::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("Cannot read"), "unexpected error: {err}");
}

#[test]
fn test_config_starts_games_with_cash() {
    let config = BadCookerConfig::default_test();
    assert_eq!(config.starting_resources.time, GameTime::FULL_DAY);
    assert_eq!(config.starting_resources.cash, Cash::new(100));

    let after = config
        .starting_resources
        .spend_cash(50, badcooker_core::DebtPolicy::Forbid)
        .unwrap();
    assert_eq!(after.cash, Cash::new(50));
}

#[test]
fn db_path_override_resolves_like_the_config_file() {
    let dir = TempDir::new().unwrap();
    let mut config = BadCookerConfig::default_test();

    config.set_db_path(dir.path(), "saves/games.json");
    assert_eq!(config.db_path, dir.path().join("saves").join("games.json"));

    let absolute = dir.path().join("elsewhere.json");
    config.set_db_path("ignored", &absolute);
    assert_eq!(config.db_path, absolute);
}
