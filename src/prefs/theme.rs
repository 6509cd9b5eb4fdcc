//! Light/dark theme preference.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::store::PreferenceStore;
use crate::core::{MatchError, Result};

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(MatchError::Config(format!("unknown theme {other:?}"))),
        }
    }
}

/// Read the saved theme, falling back to the default for missing or unknown values.
pub fn load_theme(store: &impl PreferenceStore) -> Result<Theme> {
    let Some(raw) = store.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };
    Ok(raw.parse().unwrap_or_else(|_| {
        warn!(value = %raw, "ignoring unknown saved theme");
        Theme::default()
    }))
}

/// Persist the theme.
pub fn save_theme(store: &mut impl PreferenceStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
