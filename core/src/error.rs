use thiserror::Error;

use crate::types::{GameIndex, TIME_CEILING, TIME_FLOOR};

/// Violations of the game-time and cash arithmetic rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("GameTime({value}) not in valid range [{}, {}]", TIME_FLOOR, TIME_CEILING)]
    OutOfRange { value: i64 },

    #[error("Time deficit: {requested} from {current} brings you to an unallowed tiredness level")]
    TimeDeficit { current: i64, requested: u64 },

    #[error("Cash deficit: cannot spend {requested} with a balance of {balance}")]
    CashDeficit { balance: i64, requested: u64 },
}

pub type ResourceResult<T> = Result<T, ResourceError>;

/// Failures turning a structured document into games.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed document: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Malformed document at '{path}': expected {expected}")]
    Malformed { path: String, expected: &'static str },

    #[error("Invalid game at index {index} ('{field}'): {source}")]
    InvalidEntity {
        index: GameIndex,
        field: &'static str,
        #[source]
        source: ResourceError,
    },
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failures of the persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Serialization error: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
