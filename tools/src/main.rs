//! badcooker: headless front end for the Bad Cooker game database.
//!
//! Usage:
//!   badcooker show                         [--data-dir ./data] [--db games.json]
//!   badcooker new-game
//!   badcooker spend --game 0 --amount 50   [--allow-debts]
//!   badcooker earn  --game 0 --amount 50
//!   badcooker work  --game 0 --amount 120
//!   badcooker rest  --game 0 --amount 120
//!
//! Flags may come before or after the command. A relative --db is resolved
//! against the data directory.

use anyhow::{anyhow, bail, Context, Result};
use badcooker_core::{
    config::{BadCookerConfig, CONFIG_FILE, DEFAULT_DB_FILE},
    BadCookerData, DebtPolicy, Game, GameStore, UnitResources,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = parse_command(&args)?;
    let data_dir = find_value(&args, "--data-dir").unwrap_or("./data");

    let mut config = load_config(data_dir)?;
    if let Some(db) = find_value(&args, "--db") {
        config.set_db_path(data_dir, db);
    }

    let store = GameStore::open(&config.db_path);
    let mut data = store.load_or_default()?;

    match command {
        "show" => {
            print_games(&data, &config);
            return Ok(());
        }
        "new-game" => {
            let index = data.push(Game::new(config.starting_resources));
            println!("game {index}: {}", config.starting_resources.render_with(&config.theme));
        }
        "spend" | "earn" | "work" | "rest" => {
            let index: usize = require_arg(&args, "--game")?;
            let amount: i64 = require_arg(&args, "--amount")?;
            let policy = if args.iter().any(|a| a == "--allow-debts") {
                DebtPolicy::Allow
            } else {
                DebtPolicy::Forbid
            };
            let game = data
                .game_mut(index)
                .ok_or_else(|| anyhow!("No game at index {index}"))?;

            let resources = apply(command, game.unit_resources, amount, policy)
                .with_context(|| format!("Cannot {command} {amount} in game {index}"))?;
            game.unit_resources = resources;
            println!("game {index}: {}", resources.render_with(&config.theme));
        }
        other => bail!("Unknown command '{other}'"),
    }

    store.save(&data)?;
    log::info!("{command}: saved {} games to {}", data.len(), store.path().display());
    Ok(())
}

fn apply(
    command: &str,
    resources: UnitResources,
    amount: i64,
    policy: DebtPolicy,
) -> Result<UnitResources> {
    let updated = match command {
        "spend" => resources.spend_cash(amount, policy)?,
        "earn"  => resources.earn_cash(amount)?,
        "work"  => resources.spend_time(amount)?,
        "rest"  => resources.add_time(amount)?,
        other   => bail!("'{other}' does not change resources"),
    };
    Ok(updated)
}

fn load_config(data_dir: &str) -> Result<BadCookerConfig> {
    if Path::new(data_dir).join(CONFIG_FILE).exists() {
        return BadCookerConfig::load(data_dir);
    }
    log::debug!("no {CONFIG_FILE} in {data_dir}, using defaults");
    Ok(BadCookerConfig {
        db_path: Path::new(data_dir).join(DEFAULT_DB_FILE),
        ..BadCookerConfig::default()
    })
}

fn print_games(data: &BadCookerData, config: &BadCookerConfig) {
    if data.is_empty() {
        println!("No games yet. Start one with `badcooker new-game`.");
        return;
    }
    for (index, game) in data.games.iter().enumerate() {
        println!("game {index}: {}", game.unit_resources.render_with(&config.theme));
    }
}

/// Flags that consume the argument after them.
const VALUE_FLAGS: [&str; 4] = ["--data-dir", "--db", "--game", "--amount"];
const SWITCHES: [&str; 1] = ["--allow-debts"];

/// The command is the first argument that is neither a flag nor a flag's
/// value. No command at all means `show`.
fn parse_command(args: &[String]) -> Result<&str> {
    let mut command = None;
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            rest.next()
                .ok_or_else(|| anyhow!("Missing value for {arg}"))?;
        } else if arg.starts_with("--") {
            if !SWITCHES.contains(&arg.as_str()) {
                bail!("Unknown flag '{arg}'");
            }
        } else if let Some(first) = command {
            bail!("Unexpected argument '{arg}' after command '{first}'");
        } else {
            command = Some(arg.as_str());
        }
    }
    Ok(command.unwrap_or("show"))
}

fn find_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == key).map(|w| w[1].as_str())
}

fn require_arg<T: std::str::FromStr>(args: &[String], key: &str) -> Result<T> {
    let raw = find_value(args, key).ok_or_else(|| anyhow!("Missing {key}"))?;
    raw.parse()
        .map_err(|_| anyhow!("Invalid value for {key}: '{raw}'"))
}
