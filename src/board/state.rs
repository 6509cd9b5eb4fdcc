//! Board state: card layout plus counters.
//!
//! Uses `im` persistent data structures so a session can hand out cheap
//! snapshots of the board to renderers.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardPosition, ItemId};
use crate::core::{MatchError, Result};

/// Ordered cards, counters and the set of matched items.
///
/// Invariants: every `ItemId` appears on exactly two cards, and
/// `matched_pairs <= total_pairs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    cards: Vector<CardInstance>,
    clicks: u32,
    matched_pairs: usize,
    total_pairs: usize,
    matched: ImHashSet<ItemId>,
}

impl BoardState {
    /// Build a board from a laid-out card sequence.
    ///
    /// # Errors
    /// Returns `MatchError::Config` unless every item appears exactly twice.
    pub fn from_cards(cards: Vec<CardInstance>) -> Result<Self> {
        let mut counts = rustc_hash::FxHashMap::<ItemId, usize>::default();
        for card in &cards {
            *counts.entry(card.item_id).or_default() += 1;
        }
        if let Some((item, n)) = counts.iter().find(|&(_, &n)| n != 2) {
            return Err(MatchError::Config(format!("{item} appears {n} times, expected 2")));
        }

        Ok(Self {
            total_pairs: counts.len(),
            cards: cards.into_iter().collect(),
            clicks: 0,
            matched_pairs: 0,
            matched: ImHashSet::new(),
        })
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    pub fn card(&self, pos: CardPosition) -> Result<&CardInstance> {
        self.cards.get(pos.index()).ok_or(MatchError::InvalidPosition {
            position: pos.index(),
            board_len: self.cards.len(),
        })
    }

    fn card_mut(&mut self, pos: CardPosition) -> Result<&mut CardInstance> {
        let board_len = self.cards.len();
        self.cards.get_mut(pos.index()).ok_or(MatchError::InvalidPosition {
            position: pos.index(),
            board_len,
        })
    }

    /// Iterate over cards in layout order.
    pub fn cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Accepted flips so far.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Has this item's pair been found?
    #[must_use]
    pub fn is_matched(&self, item: ItemId) -> bool {
        self.matched.contains(&item)
    }

    /// All pairs found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    /// Count one accepted flip.
    pub fn record_click(&mut self) {
        self.clicks += 1;
    }

    /// Turn a card face-up.
    pub fn reveal(&mut self, pos: CardPosition) -> Result<()> {
        self.card_mut(pos)?.reveal();
        Ok(())
    }

    /// Turn a card face-down unless it is matched.
    pub fn hide(&mut self, pos: CardPosition) -> Result<()> {
        self.card_mut(pos)?.hide();
        Ok(())
    }

    /// Record a found pair. Both positions must hold the same item.
    ///
    /// Returns `false` without changes if the pair is invalid or already counted.
    pub fn mark_pair(&mut self, a: CardPosition, b: CardPosition) -> Result<bool> {
        let item = self.card(a)?.item_id;
        if a == b || self.card(b)?.item_id != item || self.matched.contains(&item) {
            return Ok(false);
        }

        self.card_mut(a)?.mark_matched();
        self.card_mut(b)?.mark_matched();
        self.matched.insert(item);
        self.matched_pairs += 1;
        Ok(true)
    }

    /// Positions of the two cards showing `item`.
    #[must_use]
    pub fn positions_of(&self, item: ItemId) -> Vec<CardPosition> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.item_id == item)
            .map(|(i, _)| CardPosition::new(i))
            .collect()
    }
}
