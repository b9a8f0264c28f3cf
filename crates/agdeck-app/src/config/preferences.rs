//! Theme preference persistence
//!
//! The preference is the only durable state. Storage problems never reach
//! the user: loading falls back to the default (`dark`) and saving reports
//! an error the caller logs.

use std::path::{Path, PathBuf};

use agdeck_core::prelude::*;
use agdeck_core::ThemePreference;

use super::settings::APP_DIR;
use super::types::UserPreferences;

const PREFERENCES_FILENAME: &str = "preferences.toml";

/// `<data dir>/agdeck/preferences.toml`, if the platform has a data directory
pub fn preferences_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR).join(PREFERENCES_FILENAME))
}

/// Load the stored preference, or the default when storage is unavailable,
/// the file is missing, or its content is not a known literal.
pub fn load_theme_preference(prefs_path: Option<&Path>) -> ThemePreference {
    let Some(prefs_path) = prefs_path else {
        debug!("Preference storage unavailable, using default theme");
        return ThemePreference::default();
    };

    if !prefs_path.exists() {
        debug!("No preferences file at {:?}", prefs_path);
        return ThemePreference::default();
    }

    match std::fs::read_to_string(prefs_path) {
        Ok(content) => match toml::from_str::<UserPreferences>(&content) {
            Ok(prefs) => {
                debug!("Loaded theme preference {} from {:?}", prefs.theme, prefs_path);
                prefs.theme
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", prefs_path, e);
                ThemePreference::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", prefs_path, e);
            ThemePreference::default()
        }
    }
}

/// Save the preference.
///
/// Atomic write: a per-process temp file renamed over the target, so a
/// second instance saving at the same time cannot interleave with this one.
pub fn save_theme_preference(prefs_path: Option<&Path>, theme: ThemePreference) -> Result<()> {
    let prefs_path = prefs_path.ok_or_else(|| Error::storage_unavailable(PREFERENCES_FILENAME))?;
    let dir = prefs_path
        .parent()
        .ok_or_else(|| Error::storage_unavailable(prefs_path))?;

    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let header = "# Agency Deck preferences\n\
                  # theme = \"light\" | \"dark\" | \"system\"\n\n";
    let content = toml::to_string_pretty(&UserPreferences { theme })?;

    let temp_path = dir.join(temp_filename());
    std::fs::write(&temp_path, format!("{}{}", header, content))
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, prefs_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved theme preference {} to {:?}", theme, prefs_path);
    Ok(())
}

fn temp_filename() -> String {
    format!(".{}.{}.tmp", PREFERENCES_FILENAME, std::process::id())
}
