//! Catalog registry for entry lookup.
//!
//! Keeps entries in load order (so sampling by index is stable for a given
//! seed) with a hash index for lookup by id.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::entry::{CatalogEntry, ItemId};

/// Registry of loaded catalog entries.
///
/// ## Example
///
/// ```
/// use memory_match::catalog::{CatalogEntry, CatalogRegistry, ItemId};
///
/// let mut registry = CatalogRegistry::new();
/// registry.register(CatalogEntry::new(ItemId::new(25), "pikachu").unwrap());
///
/// assert_eq!(registry.get(ItemId::new(25)).unwrap().name, "pikachu");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogRegistry {
    entries: Vec<CatalogEntry>,
    index: FxHashMap<ItemId, usize>,
}

impl CatalogRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry.
    ///
    /// Returns `false` and keeps the existing entry if the id is already known.
    pub fn register(&mut self, entry: CatalogEntry) -> bool {
        if let Some(&existing) = self.index.get(&entry.id) {
            warn!(
                id = entry.id.raw(),
                kept = %self.entries[existing].name,
                dropped = %entry.name,
                "duplicate catalog id"
            );
            return false;
        }
        self.index.insert(entry.id, self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Get an entry by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CatalogEntry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    /// Get an entry by load position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the first `len` entries.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.entries.len() {
            return;
        }
        for dropped in self.entries.drain(len..) {
            self.index.remove(&dropped.id);
        }
    }

    /// Iterate over entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

impl FromIterator<CatalogEntry> for CatalogRegistry {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.register(entry);
        }
        registry
    }
}

impl Extend<CatalogEntry> for CatalogRegistry {
    fn extend<I: IntoIterator<Item = CatalogEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.register(entry);
        }
    }
}
