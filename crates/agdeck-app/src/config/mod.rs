//! Configuration file parsing for Agency Deck
//!
//! Supports:
//! - `<config dir>/agdeck/config.toml` - Application settings
//! - `<data dir>/agdeck/preferences.toml` - Persisted theme preference

pub mod preferences;
pub mod settings;
pub mod types;

pub use preferences::{load_theme_preference, preferences_path, save_theme_preference};
pub use settings::{config_dir, load_settings, settings_path};
pub use types::*;
