//! User preferences: a key-value slot store and the theme flag kept in it.

pub mod store;
pub mod theme;

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{load_theme, save_theme, Theme, THEME_KEY};
