//! Terminal states and the end-of-game summary.

use serde::{Deserialize, Serialize};

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting input.
    #[default]
    Active,
    /// Every pair found before time ran out.
    Won,
    /// Countdown reached zero.
    Lost,
}

impl GameStatus {
    /// Won or lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub status: GameStatus,
    pub clicks: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    /// Whole seconds the countdown ran.
    pub elapsed_secs: u32,
}

impl GameResult {
    /// Check if the game was won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == GameStatus::Won
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            GameStatus::Won => write!(
                f,
                "You won! {} pairs in {} clicks and {}s",
                self.total_pairs, self.clicks, self.elapsed_secs
            ),
            GameStatus::Lost => write!(
                f,
                "Time's up! {}/{} pairs found in {} clicks",
                self.matched_pairs, self.total_pairs, self.clicks
            ),
            GameStatus::Active => write!(f, "{}/{} pairs so far", self.matched_pairs, self.total_pairs),
        }
    }
}
