//! Session input events and the notifications they produce.

use crate::cards::{CardPosition, ItemId};
use crate::rules::{GameResult, IgnoreReason};

/// Input delivered to a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Player picked a card.
    Flip(CardPosition),
    /// One second of the countdown passed.
    Tick,
    /// Player used the reveal-all power-up.
    PowerUp,
    /// Start over with a fresh board.
    Reset,
    /// Move the logical clock to this many ms and fire due callbacks.
    Advance(u64),
}

/// Something observable that changed, for renderers and logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    CardRevealed { position: CardPosition, item: ItemId },
    PairMatched { item: ItemId, positions: [CardPosition; 2] },
    /// Pair differs; it turns back over at `revert_at_ms`.
    Mismatch {
        positions: [CardPosition; 2],
        revert_at_ms: u64,
    },
    CardsHidden(Vec<CardPosition>),
    PowerUpStarted { ends_at_ms: u64 },
    PowerUpEnded,
    TimeChanged(u32),
    Won(GameResult),
    Lost(GameResult),
    Reset,
    Ignored(IgnoreReason),
}

impl Notification {
    /// Does this end the game?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Notification::Won(_) | Notification::Lost(_))
    }
}
