//! JSON store load/save behaviour.

use badcooker_core::{
    store::{read_from, write_to},
    BadCookerData, Cash, DebtPolicy, DecodeError, Game, GameStore, GameTime, StoreError,
    UnitResources,
};
use std::fs;
use tempfile::TempDir;

const TWO_GAMES: &str = r#"{"games":[
    {"unit_resources":{"time":500,"cash":100}},
    {"unit_resources":{"time":-100,"cash":-5}}
]}"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn spend_save_reload_scenario() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("games.json");
    fs::write(&path, TWO_GAMES).unwrap();

    let store = GameStore::open(&path);
    let mut data = store.load().expect("initial load");
    assert_eq!(data.len(), 2);

    let first = data.game_mut(0).unwrap();
    first.unit_resources = first.unit_resources.spend_cash(50, DebtPolicy::Forbid).unwrap();
    store.save(&data).expect("save");

    let reloaded = store.load().expect("reload");
    assert_eq!(reloaded.game(0).unwrap().unit_resources.cash, Cash::new(50));
    assert_eq!(reloaded.game(0).unwrap().unit_resources.time, GameTime::new(500).unwrap());
    assert_eq!(reloaded.game(1), data.game(1));
    assert_eq!(reloaded.game(1).unwrap().unit_resources.cash.debts(), Some(5));
}

#[test]
fn save_overwrites_rather_than_appends() {
    let dir = TempDir::new().unwrap();
    let store = GameStore::open(dir.path().join("games.json"));

    let mut data = BadCookerData::default();
    data.push(Game::default());
    data.push(Game::default());
    store.save(&data).unwrap();

    let smaller = BadCookerData::new(vec![Game::default()]);
    store.save(&smaller).unwrap();

    assert_eq!(store.load().unwrap(), smaller);
}

#[test]
fn save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let store = GameStore::open(dir.path().join("nested").join("db").join("games.json"));

    store.save(&BadCookerData::default()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn missing_file_is_an_io_error_for_load() {
    let dir = TempDir::new().unwrap();
    let store = GameStore::open(dir.path().join("absent.json"));

    assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    assert!(store.load_or_default().unwrap().is_empty());
}

#[test]
fn invalid_game_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("games.json");
    fs::write(
        &path,
        r#"{"games":[{"unit_resources":{"time":0,"cash":0}},{"unit_resources":{"time":5000,"cash":0}}]}"#,
    )
    .unwrap();

    match GameStore::open(&path).load() {
        Err(StoreError::Decode(DecodeError::InvalidEntity { index: 1, .. })) => {}
        other => panic!("expected InvalidEntity at index 1, got {other:?}"),
    }
}

#[test]
fn broken_json_is_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("games.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        GameStore::open(&path).load(),
        Err(StoreError::Decode(DecodeError::Syntax(_)))
    ));
}

#[test]
fn reader_and_writer_round_trip() {
    let data = BadCookerData::new(vec![
        Game::new(UnitResources::new(GameTime::new(-100).unwrap(), Cash::new(-5))),
        Game::new(UnitResources::new(GameTime::new(1000).unwrap(), Cash::new(7))),
    ]);

    let mut buffer = Vec::new();
    write_to(&mut buffer, &data).unwrap();

    let decoded = read_from(buffer.as_slice()).unwrap();
    assert_eq!(decoded, data);
}
