//! Settings loading from `config.toml`

use std::path::{Path, PathBuf};

use agdeck_core::prelude::*;

use super::types::Settings;

pub const APP_DIR: &str = "agdeck";
const CONFIG_FILENAME: &str = "config.toml";

/// `<config dir>/agdeck`, if the platform has a config directory
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}

pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILENAME))
}

/// Load settings from the default location.
///
/// Never fails: a missing, unreadable or invalid file yields defaults.
pub fn load_settings() -> Settings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from an explicit `config.toml` path
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
