//! Listing-page wire format.
//!
//! The catalog API returns pages shaped like:
//!
//! ```json
//! {
//!   "count": 1302,
//!   "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
//!   "previous": null,
//!   "results": [{ "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }]
//! }
//! ```
//!
//! Entries carry no id field; the id is the last path segment of `url`.

use serde::Deserialize;
use url::Url;

use super::entry::{CatalogEntry, ItemId};
use crate::core::{MatchError, Result};

/// One page of the paginated listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingPage {
    /// Total entries the catalog holds.
    #[serde(default)]
    pub count: usize,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Named references on this page.
    pub results: Vec<NamedResource>,
}

/// A `{name, url}` reference as the listing returns it.
#[derive(Clone, Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl ListingPage {
    /// Parse a page from its JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| MatchError::Parse(e.to_string()))
    }

    /// Convert every reference on the page into an entry.
    pub fn entries(&self) -> Result<Vec<CatalogEntry>> {
        self.results.iter().map(NamedResource::to_entry).collect()
    }
}

impl NamedResource {
    /// Build a catalog entry, deriving the id from the reference URL.
    pub fn to_entry(&self) -> Result<CatalogEntry> {
        let id = id_from_url(&self.url)?;
        CatalogEntry::new(id, &self.name)
    }
}

/// Extract the numeric id from a reference URL such as `.../pokemon/25/`.
pub fn id_from_url(raw: &str) -> Result<ItemId> {
    let url = Url::parse(raw).map_err(|e| MatchError::Parse(format!("bad entry url {raw}: {e}")))?;
    let segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| MatchError::Parse(format!("entry url {raw} has no path")))?;

    segment
        .parse::<u32>()
        .map(ItemId::new)
        .map_err(|_| MatchError::Parse(format!("entry url {raw} does not end in an id")))
}
