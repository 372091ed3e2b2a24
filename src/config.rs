/// Application settings
///
/// Settings are read once at startup from a JSON file. Every field has a
/// default, so a partial file (or no file at all) is fine:
/// - Linux: ~/.config/reliable-narrator/settings.json
/// - macOS: ~/Library/Application Support/reliable-narrator/settings.json
/// - Windows: %APPDATA%\reliable-narrator\settings.json
///
/// `RELIABLE_NARRATOR_SETTINGS` overrides the location.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable that points at an alternative settings file
pub const SETTINGS_ENV: &str = "RELIABLE_NARRATOR_SETTINGS";

const MIN_THUMBNAIL_SIZE: u32 = 32;
const MAX_THUMBNAIL_SIZE: u32 = 1024;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Initial window width in logical pixels
    pub window_width: f32,
    /// Initial window height in logical pixels
    pub window_height: f32,
    /// Longest edge of generated thumbnails
    pub thumbnail_size: u32,
    /// Follow symlinks when scanning a dropped folder
    pub follow_links: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 480.0,
            window_height: 820.0,
            thumbnail_size: 256,
            follow_links: true,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    ///
    /// A missing file is normal. An unreadable or malformed one is logged
    /// and ignored.
    pub fn load_or_default() -> Self {
        let path = Self::settings_path();

        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(settings) => {
                log::info!("⚙️  Loaded settings from {}", path.display());
                if let Ok(json) = settings.to_json() {
                    log::debug!("Effective settings: {}", json);
                }
                settings
            }
            Err(e) => {
                log::warn!("⚠️  {}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// Get the path where the settings file is expected
    pub fn settings_path() -> PathBuf {
        if let Some(custom) = std::env::var_os(SETTINGS_ENV) {
            return PathBuf::from(custom);
        }

        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default();

        path.push("reliable-narrator");
        path.push("settings.json");
        path
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.thumbnail_size = settings
            .thumbnail_size
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "thumbnail_size": 128 }"#).unwrap();

        assert_eq!(settings.thumbnail_size, 128);
        assert_eq!(settings.window_width, Settings::default().window_width);
        assert!(settings.follow_links);
    }

    #[test]
    fn test_thumbnail_size_is_clamped() {
        let tiny = Settings::from_json(r#"{ "thumbnail_size": 1 }"#).unwrap();
        assert_eq!(tiny.thumbnail_size, MIN_THUMBNAIL_SIZE);

        let huge = Settings::from_json(r#"{ "thumbnail_size": 100000 }"#).unwrap();
        assert_eq!(huge.thumbnail_size, MAX_THUMBNAIL_SIZE);
    }

    #[test]
    fn test_serialization() {
        let mut settings = Settings::default();
        settings.follow_links = false;
        settings.window_height = 700.0;

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load(Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
