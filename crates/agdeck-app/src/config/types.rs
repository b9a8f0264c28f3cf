//! Configuration types for Agency Deck
//!
//! Defines:
//! - `Settings` - Application settings (`config.toml`)
//! - `UserPreferences` - The persisted theme preference (`preferences.toml`)

use std::path::PathBuf;

use agdeck_core::ThemePreference;
use serde::{Deserialize, Serialize};

/// Application settings (`<config dir>/agdeck/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub assistant: AssistantSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub appearance: AppearanceSettings,
}

/// Companion / text-generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantSettings {
    /// Ship the companion widget at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Model name used in the request path
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative-language REST API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Upper bound on a single request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout; also the redraw cadence when idle
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// System appearance signal settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppearanceSettings {
    /// Debounce for appearance file changes
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Override for the appearance signal file
    /// (default: `<config dir>/agdeck/appearance`)
    #[serde(default)]
    pub signal_file: Option<PathBuf>,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            signal_file: None,
        }
    }
}

/// Persisted user preferences (`<data dir>/agdeck/preferences.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub theme: ThemePreference,
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_debounce_ms() -> u64 {
    200
}
