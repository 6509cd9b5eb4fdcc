//! Core types: RNG, configuration and errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{CatalogConfig, GameConfig, GeneralConfig, PrefsConfig, RulesConfig, ID_PLACEHOLDER};
pub use error::{MatchError, Result};
pub use rng::{GameRng, GameRngState};
