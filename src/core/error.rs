//! Error types for the game library.

use thiserror::Error;

/// Errors raised while loading the catalog, building boards or handling input.
#[derive(Error, Debug)]
pub enum MatchError {
    /// HTTP request to the catalog failed.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// Catalog answered with a non-success status.
    #[error("catalog returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Catalog payload could not be understood.
    #[error("failed to parse catalog data: {0}")]
    Parse(String),

    /// The catalog holds fewer entries than the board needs pairs.
    #[error("catalog has {available} entries but the board needs {needed}")]
    NotEnoughEntries {
        /// Pairs requested.
        needed: usize,
        /// Entries loaded.
        available: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A flip referred to a card that does not exist.
    #[error("card position {position} is out of range (board has {board_len} cards)")]
    InvalidPosition {
        /// Requested position.
        position: usize,
        /// Number of cards on the board.
        board_len: usize,
    },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for MatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MatchError::Parse(err.to_string())
        } else {
            MatchError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Serialization(err.to_string())
    }
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, MatchError>;
