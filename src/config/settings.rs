//! User settings for the budget tracker
//!
//! Display and export preferences, stored as JSON in the config directory.
//! The ledger itself is never written to disk.

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::DEFAULT_DATE_FORMAT;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format used when rendering and exporting (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Directory CSV exports are written to; the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// How many of the latest transactions the account view lists
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_recent_transactions() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            export_dir: None,
            recent_transactions: default_recent_transactions(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            log::debug!(
                "no settings at {}, using defaults",
                settings_path.display()
            );
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings that would break rendering
    pub fn validate(&self) -> Result<(), TrackerError> {
        let bad_pattern = StrftimeItems::new(&self.date_format).any(|item| item == Item::Error);
        if self.date_format.is_empty() || bad_pattern {
            return Err(TrackerError::Config(format!(
                "Invalid date format: '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Where a CSV export called `file_name` should be written
    pub fn export_path(&self, file_name: &str) -> PathBuf {
        let dir = self.export_dir.as_deref().unwrap_or_else(|| Path::new("."));
        dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.recent_transactions, 5);
        assert!(settings.export_dir.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            date_format: "%d.%m.%Y".into(),
            export_dir: Some(temp_dir.path().join("exports")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("nope"));
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"recent_transactions": 3}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.recent_transactions, 3);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let settings = Settings {
            date_format: "%Q".into(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(TrackerError::Config(_))
        ));
    }

    #[test]
    fn test_export_path() {
        let mut settings = Settings::default();
        assert_eq!(settings.export_path("main.csv"), PathBuf::from("./main.csv"));

        settings.export_dir = Some(PathBuf::from("/tmp/out"));
        assert_eq!(
            settings.export_path("main.csv"),
            PathBuf::from("/tmp/out/main.csv")
        );
    }
}
