//! Bad Cooker core: per-game resources (time and cash), their arithmetic
//! rules, and the JSON database they are persisted in.

pub mod cash;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod game_time;
pub mod store;
pub mod types;
pub mod unit_resources;

pub use cash::{Cash, DebtPolicy};
pub use error::{DecodeError, ResourceError, StoreError};
pub use game::{BadCookerData, Game};
pub use game_time::GameTime;
pub use store::GameStore;
pub use unit_resources::UnitResources;
