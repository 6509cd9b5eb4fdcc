//! Game configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration:
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::from_toml("[game]\npair_count = 6\n").unwrap();
//! assert_eq!(config.game.pair_count, 6);
//! assert_eq!(config.game.time_limit_secs, 60);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};

/// Placeholder substituted with the entry id in image URL templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Top-level configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board and timing rules.
    #[serde(default)]
    pub game: RulesConfig,
    /// Remote catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Preference storage.
    #[serde(default)]
    pub prefs: PrefsConfig,
    /// Logging and other process settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GameConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `MatchError::Config` if the TOML is invalid or fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| MatchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check values that serde cannot rule out.
    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        if self.catalog.page_size == 0 {
            return Err(MatchError::Config("catalog.page_size must be at least 1".into()));
        }
        if !self.catalog.image_url_template.contains(ID_PLACEHOLDER) {
            return Err(MatchError::Config(format!(
                "catalog.image_url_template must contain {ID_PLACEHOLDER}"
            )));
        }
        Ok(())
    }
}

/// Board size and timing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Number of pairs on the board.
    #[serde(default = "default_pair_count")]
    pub pair_count: usize,
    /// Countdown length in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u32,
    /// Delay before a mismatched pair is turned back over.
    #[serde(default = "default_mismatch_delay")]
    pub mismatch_delay_ms: u64,
    /// How long the reveal-all power-up lasts.
    #[serde(default = "default_power_up_duration")]
    pub power_up_duration_ms: u64,
    /// Power-up charges per game.
    #[serde(default = "default_power_ups")]
    pub power_ups: u32,
    /// RNG seed. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            pair_count: default_pair_count(),
            time_limit_secs: default_time_limit(),
            mismatch_delay_ms: default_mismatch_delay(),
            power_up_duration_ms: default_power_up_duration(),
            power_ups: default_power_ups(),
            seed: None,
        }
    }
}

impl RulesConfig {
    /// Reject boards and timers that could never be played.
    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(MatchError::Config("game.pair_count must be at least 1".into()));
        }
        if self.time_limit_secs == 0 {
            return Err(MatchError::Config("game.time_limit_secs must be at least 1".into()));
        }
        Ok(())
    }
}

/// Remote catalog endpoint settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Listing resource under the root.
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Entries requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Stop paginating after this many entries.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Per-request timeout.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
    /// Image URL with `{id}` in place of the entry id.
    #[serde(default = "default_image_template")]
    pub image_url_template: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource: default_resource(),
            page_size: default_page_size(),
            max_entries: default_max_entries(),
            timeout_ms: default_timeout(),
            image_url_template: default_image_template(),
        }
    }
}

/// Where preferences live.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrefsConfig {
    /// Preference file path.
    #[serde(default = "default_prefs_path")]
    pub path: String,
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self { path: default_prefs_path() }
    }
}

/// Process-level settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

fn default_pair_count() -> usize {
    8
}
fn default_time_limit() -> u32 {
    60
}
fn default_mismatch_delay() -> u64 {
    1000
}
fn default_power_up_duration() -> u64 {
    2000
}
fn default_power_ups() -> u32 {
    1
}
fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}
fn default_resource() -> String {
    "pokemon".to_string()
}
fn default_page_size() -> usize {
    100
}
fn default_max_entries() -> usize {
    151
}
fn default_timeout() -> u64 {
    10_000
}
fn default_image_template() -> String {
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png"
        .to_string()
}
fn default_prefs_path() -> String {
    "memory-match-prefs.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
