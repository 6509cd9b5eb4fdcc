//! Read-only snapshot of a session for renderers.

use crate::cards::ItemId;
use crate::rules::GameStatus;

/// What a single board slot shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardFace {
    /// Face-down.
    Hidden,
    /// Face-up but not yet paired (picked, or revealed by the power-up).
    Shown { item: ItemId, name: String, image: String },
    /// Part of a found pair.
    Matched { item: ItemId, name: String, image: String },
}

impl CardFace {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, CardFace::Hidden)
    }
}

/// Everything needed to draw the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub cards: Vec<CardFace>,
    pub clicks: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub time_remaining: u32,
    pub power_ups_left: u32,
    pub peeking: bool,
    pub locked: bool,
    pub status: GameStatus,
}
