//! Image URL convention: a template with `{id}` in place of the entry id.

use serde::{Deserialize, Serialize};

use super::entry::ItemId;
use crate::core::{MatchError, Result, ID_PLACEHOLDER};

/// Derives a face image URL from an item id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrlTemplate(String);

impl ImageUrlTemplate {
    /// Wrap a template string.
    ///
    /// # Errors
    /// Returns `MatchError::Config` if the template lacks `{id}`.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(ID_PLACEHOLDER) {
            return Err(MatchError::Config(format!(
                "image url template {template:?} has no {ID_PLACEHOLDER}"
            )));
        }
        Ok(Self(template))
    }

    /// Image URL for an item.
    #[must_use]
    pub fn url_for(&self, id: ItemId) -> String {
        self.0.replace(ID_PLACEHOLDER, &id.raw().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
