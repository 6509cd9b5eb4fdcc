//! The pick-two-and-compare rule.
//!
//! A flip reveals one card. The second flip of a turn compares the two
//! picks: equal items are locked face-up as a pair, unequal ones stay
//! pending until the caller turns them back with [`revert_mismatch`].

use smallvec::SmallVec;
use tracing::debug;

use crate::board::BoardState;
use crate::cards::{CardPosition, ItemId};
use crate::core::Result;

/// Cards picked this turn and not yet resolved. Never more than two.
pub type Selection = SmallVec<[CardPosition; 2]>;

/// Why a flip did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Card is already face-up or matched.
    AlreadyRevealed,
    /// Input is locked (mismatch pending, power-up running).
    Locked,
    /// The game has ended.
    GameOver,
    /// No power-up charge left, or one is already running.
    NoPowerUp,
}

/// What a flip did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a turn is up.
    FirstPick { position: CardPosition, item: ItemId },
    /// Second card matched the first.
    Matched {
        item: ItemId,
        first: CardPosition,
        second: CardPosition,
    },
    /// Second card differs; both stay up until reverted.
    Mismatched { first: CardPosition, second: CardPosition },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Apply one flip to the board.
///
/// # Errors
/// Returns `MatchError::InvalidPosition` for a position off the board.
pub fn apply_flip(board: &mut BoardState, selection: &mut Selection, position: CardPosition) -> Result<FlipOutcome> {
    let card = board.card(position)?;
    if !card.is_selectable() {
        return Ok(FlipOutcome::Ignored(IgnoreReason::AlreadyRevealed));
    }
    if selection.len() >= 2 {
        return Ok(FlipOutcome::Ignored(IgnoreReason::Locked));
    }
    let item = card.item_id;

    board.reveal(position)?;
    board.record_click();
    selection.push(position);
    debug!(%position, %item, clicks = board.clicks(), "card flipped");

    let &[first, second] = selection.as_slice() else {
        return Ok(FlipOutcome::FirstPick { position, item });
    };

    if board.card(first)?.item_id == item {
        board.mark_pair(first, second)?;
        selection.clear();
        Ok(FlipOutcome::Matched { item, first, second })
    } else {
        Ok(FlipOutcome::Mismatched { first, second })
    }
}

/// Turn a pending mismatched pair face-down and clear the selection.
///
/// Returns the positions that were hidden.
pub fn revert_mismatch(board: &mut BoardState, selection: &mut Selection) -> Result<Vec<CardPosition>> {
    let hidden: Vec<CardPosition> = selection.drain(..).collect();
    for &position in &hidden {
        board.hide(position)?;
    }
    Ok(hidden)
}
