//! # memory-match
//!
//! A memory-matching card game over a public creature catalog.
//!
//! Cards come in pairs drawn from the catalog, start face-down in a
//! shuffled grid, and are flipped two at a time. Equal pairs stay up,
//! unequal ones turn back after a short delay. Find every pair before the
//! countdown runs out.
//!
//! ## Architecture
//!
//! ```text
//! CatalogClient ─▶ CatalogRegistry ─▶ BoardGenerator ─▶ GameSession ◀─ SessionEvent
//!                                                          │
//!                                                          └─▶ Notification / BoardView
//! ```
//!
//! - **Explicit session**: all mutable game state lives in `GameSession`
//!   and changes only through `handle(event)`.
//! - **Logical clock**: deferred work (mismatch revert, power-up end) is
//!   scheduled in milliseconds and fired by `SessionEvent::Advance`, so the
//!   rules are testable without real time.
//! - **Deterministic**: a seed fixes every board, including those after reset.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `catalog`: Entries, registry, wire format, HTTP client
//! - `cards`: Card instances and positions
//! - `board`: Board state and generation
//! - `rules`: Flip/compare rule and terminal states
//! - `session`: Event handling, countdown, scheduler, view
//! - `prefs`: Theme preference storage
//! - `app`: Terminal front-end

pub mod app;
pub mod board;
pub mod cards;
pub mod catalog;
pub mod core;
pub mod prefs;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, MatchError, Result};

pub use crate::catalog::{CatalogClient, CatalogEntry, CatalogRegistry, ImageUrlTemplate, ItemId};

pub use crate::cards::{CardInstance, CardPosition};

pub use crate::board::{BoardGenerator, BoardState};

pub use crate::rules::{FlipOutcome, GameResult, GameStatus, IgnoreReason};

pub use crate::session::{BoardView, CardFace, GameSession, Notification, SessionBuilder, SessionEvent};

pub use crate::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme};
