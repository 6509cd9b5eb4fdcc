//! Catalog entries: the creatures cards are drawn from.

use serde::{Deserialize, Serialize};

use crate::core::{MatchError, Result};

/// Identifier of a catalog entry. Both cards of a pair carry the same one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// A loaded catalog entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Entry id, derived from its reference URL.
    pub id: ItemId,
    /// Display name.
    pub name: String,
}

impl CatalogEntry {
    /// Create an entry, normalizing the name.
    ///
    /// # Errors
    /// Returns `MatchError::Parse` if the name is blank.
    pub fn new(id: ItemId, name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MatchError::Parse(format!("entry {id} has an empty name")));
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    /// Name with the first letter upper-cased, for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
