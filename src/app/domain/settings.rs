use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::infrastructure::error::AppError;

/// Highest value the slider may be configured to reach.
pub const MAX_SLIDER_PERCENT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Upper bound of the tip slider (inclusive)
    #[serde(default = "default_tip_max_percent")]
    pub tip_max_percent: u32,

    /// Slider position at launch
    #[serde(default)]
    pub initial_tip_percent: u32,

    /// Prefix used when rendering tip and total
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_tip_max_percent() -> u32 {
    30
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            tip_max_percent: default_tip_max_percent(),
            initial_tip_percent: 0,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppSettings {
    /// Clamp the slider range to `1..=100` and the initial position into that range.
    pub fn sanitized(mut self) -> Self {
        self.tip_max_percent = self.tip_max_percent.clamp(1, MAX_SLIDER_PERCENT);
        self.initial_tip_percent = self.clamp_percent(self.initial_tip_percent);
        self
    }

    /// Reject a slider range outside `1..=100` or a start position past its end.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=MAX_SLIDER_PERCENT).contains(&self.tip_max_percent) {
            return Err(AppError::Settings(format!(
                "tip_max_percent {} outside 1..={}",
                self.tip_max_percent, MAX_SLIDER_PERCENT
            )));
        }
        if self.initial_tip_percent > self.tip_max_percent {
            return Err(AppError::Settings(format!(
                "initial_tip_percent {} above tip_max_percent {}",
                self.initial_tip_percent, self.tip_max_percent
            )));
        }
        Ok(())
    }

    /// Clamp a tip percentage into the slider range
    pub fn clamp_percent(&self, percent: u32) -> u32 {
        percent.min(self.tip_max_percent)
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from an explicit path, falling back to defaults.
    /// Defaults are written back only when the file does not exist yet.
    pub fn load_from(path: &Path) -> Self {
        let settings = match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No settings at {}, writing defaults", path.display());
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    warn!("Could not write default settings: {}", e);
                }
                default
            }
            Err(e) => {
                warn!("Could not read settings at {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        };
        if let Err(e) = settings.validate() {
            warn!("{}. Clamping.", e);
        }
        settings.sanitized()
    }

    /// Save settings to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Directory holding every FerrisTip file
    pub fn config_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferristip");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.tip_max_percent, 30);
        assert_eq!(settings.initial_tip_percent, 0);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Older file with only one field set
        let json = r#"{"currency_symbol": "€"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.tip_max_percent, 30);
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn test_sanitized_clamps_range() {
        let settings = AppSettings {
            tip_max_percent: 500,
            initial_tip_percent: 700,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.tip_max_percent, MAX_SLIDER_PERCENT);
        assert_eq!(settings.initial_tip_percent, MAX_SLIDER_PERCENT);

        let settings = AppSettings {
            tip_max_percent: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.tip_max_percent, 1);
    }

    #[test]
    fn test_initial_percent_clamped_to_max() {
        let settings = AppSettings {
            tip_max_percent: 20,
            initial_tip_percent: 25,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.initial_tip_percent, 20);
        assert_eq!(settings.clamp_percent(3), 3);
    }

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_load_unreadable_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let original: &[u8] = b"{\"tip_max_percent\": 50, \"currency_symbol\": \"\xa3\"}";
        fs::write(&path, original).unwrap();

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_validate_reports_out_of_range() {
        assert!(AppSettings::default().validate().is_ok());

        let err = AppSettings {
            tip_max_percent: 0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppError::Settings(_)));

        let err = AppSettings {
            tip_max_percent: 20,
            initial_tip_percent: 21,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("initial_tip_percent 21"));
    }

    #[test]
    fn test_load_out_of_range_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"tip_max_percent": 250, "initial_tip_percent": 240}"#).unwrap();

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.tip_max_percent, MAX_SLIDER_PERCENT);
        assert_eq!(settings.initial_tip_percent, MAX_SLIDER_PERCENT);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            tip_max_percent: 40,
            initial_tip_percent: 18,
            currency_symbol: "£".to_string(),
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }
}
