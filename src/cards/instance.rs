//! Card instances - one face-down tile on the board.
//!
//! Two instances share an `ItemId`. `revealed` is the card's own face-up
//! state (picked or matched); the power-up reveal is a session-level view
//! and never touches it.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;

/// Index of a card on the board, in layout order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardPosition(pub usize);

impl CardPosition {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Catalog entry this card shows.
    pub item_id: ItemId,

    /// Face image URL.
    pub face_image: String,

    /// Is the face currently shown?
    pub revealed: bool,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl CardInstance {
    /// Create a face-down card.
    #[must_use]
    pub fn new(item_id: ItemId, face_image: impl Into<String>) -> Self {
        Self {
            item_id,
            face_image: face_image.into(),
            revealed: false,
            matched: false,
        }
    }

    /// Turn face-up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn face-down again. Matched cards stay up.
    pub fn hide(&mut self) {
        if !self.matched {
            self.revealed = false;
        }
    }

    /// Lock the card face-up as part of a found pair.
    pub fn mark_matched(&mut self) {
        self.revealed = true;
        self.matched = true;
    }

    /// Can this card be picked?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }
}
