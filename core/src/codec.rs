//! Mapping between games and the generic JSON document they are stored as.
//!
//! ```text
//! { "games": [ { "unit_resources": { "time": <int>, "cash": <int> } }, ... ] }
//! ```
//!
//! Decoding is all-or-nothing: the first invalid game aborts the whole
//! collection, and the error names its index.
//!
//! Stored cash may be any value, including debts, but it must fit in an
//! `i64`. Larger numbers (or fractions) are reported as `Malformed`.

use serde_json::{json, Map, Value};

use crate::{
    cash::Cash,
    error::{DecodeError, DecodeResult},
    game::{BadCookerData, Game},
    game_time::GameTime,
    types::GameIndex,
    unit_resources::UnitResources,
};

pub fn decode_data(doc: &Value) -> DecodeResult<BadCookerData> {
    let games = object(doc, "<root>")?
        .get("games")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("games", "an array"))?;

    let games = games
        .iter()
        .enumerate()
        .map(|(index, game)| decode_game(game, index))
        .collect::<DecodeResult<Vec<_>>>()?;

    Ok(BadCookerData::new(games))
}

pub fn encode_data(data: &BadCookerData) -> Value {
    json!({
        "games": data.games.iter().map(encode_game).collect::<Vec<_>>(),
    })
}

/// `index` is the game's position in the collection, used for error context.
pub fn decode_game(doc: &Value, index: GameIndex) -> DecodeResult<Game> {
    let path = format!("games[{index}]");
    let resources_path = format!("{path}.unit_resources");
    let resources = object(doc, &path)?
        .get("unit_resources")
        .ok_or_else(|| malformed(&resources_path, "an object"))?;
    let resources = object(resources, &resources_path)?;

    let time = integer(resources, &resources_path, "time")?;
    let cash = integer(resources, &resources_path, "cash")?;

    let time = GameTime::new(time).map_err(|source| DecodeError::InvalidEntity {
        index,
        field: "time",
        source,
    })?;

    Ok(Game::new(UnitResources::new(time, Cash::new(cash))))
}

pub fn encode_game(game: &Game) -> Value {
    let resources = &game.unit_resources;
    json!({
        "unit_resources": {
            "time": i64::from(resources.time),
            "cash": i64::from(resources.cash),
        }
    })
}

fn object<'a>(value: &'a Value, path: &str) -> DecodeResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| malformed(path, "an object"))
}

fn integer(fields: &Map<String, Value>, parent: &str, key: &str) -> DecodeResult<i64> {
    fields
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| malformed(&format!("{parent}.{key}"), "a 64-bit signed integer"))
}

fn malformed(path: &str, expected: &'static str) -> DecodeError {
    DecodeError::Malformed { path: path.to_string(), expected }
}
