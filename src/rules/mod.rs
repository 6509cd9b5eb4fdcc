//! Game rules: flip/compare and terminal states.
//!
//! - `apply_flip` / `revert_mismatch`: the pick-two rule on a board
//! - `GameStatus` / `GameResult`: win and timeout bookkeeping

pub mod flip;
pub mod outcome;

pub use flip::{apply_flip, revert_mismatch, FlipOutcome, IgnoreReason, Selection};
pub use outcome::{GameResult, GameStatus};
