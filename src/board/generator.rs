//! Board generation: sample entries, duplicate each, shuffle.

use tracing::debug;

use super::state::BoardState;
use crate::cards::CardInstance;
use crate::catalog::{CatalogRegistry, ImageUrlTemplate};
use crate::core::{GameRng, MatchError, Result};

/// Lays out fresh boards from a catalog.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    pair_count: usize,
    images: ImageUrlTemplate,
}

impl BoardGenerator {
    #[must_use]
    pub fn new(pair_count: usize, images: ImageUrlTemplate) -> Self {
        Self { pair_count, images }
    }

    /// Build a shuffled board of `pair_count` distinct pairs.
    ///
    /// # Errors
    /// Returns `MatchError::NotEnoughEntries` if the catalog is too small.
    pub fn generate(&self, catalog: &CatalogRegistry, rng: &mut GameRng) -> Result<BoardState> {
        let picks = rng
            .sample_distinct(catalog.len(), self.pair_count)
            .ok_or(MatchError::NotEnoughEntries {
                needed: self.pair_count,
                available: catalog.len(),
            })?;

        let mut cards = Vec::with_capacity(self.pair_count * 2);
        for index in picks {
            let Some(entry) = catalog.get_index(index) else {
                continue;
            };
            let image = self.images.url_for(entry.id);
            cards.push(CardInstance::new(entry.id, image.clone()));
            cards.push(CardInstance::new(entry.id, image));
        }

        rng.shuffle(&mut cards);
        debug!(pairs = self.pair_count, seed = rng.seed(), "generated board");
        BoardState::from_cards(cards)
    }
}
