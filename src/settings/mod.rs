pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

pub const DEFAULT_TABLES_PER_ROW: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};
pub const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn";

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// How many tables share one line of the list.
    pub tables_per_row: NonZeroUsize,
    /// `LogPlugin` filter directive.
    pub log_filter: String,
    /// Redraw only on input while the window is unfocused.
    pub low_power_when_unfocused: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            tables_per_row: DEFAULT_TABLES_PER_ROW,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            low_power_when_unfocused: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::io::{load_settings_from_path, save_settings_to_path, SettingsError};
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_settings_path() -> PathBuf {
        std::env::temp_dir().join(format!("table_editor_settings_{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.tables_per_row.get(), 3);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
        assert!(settings.low_power_when_unfocused);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"tables_per_row": 2}"#).unwrap();
        assert_eq!(settings.tables_per_row.get(), 2);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_zero_tables_per_row_is_rejected() {
        assert!(serde_json::from_str::<AppSettings>(r#"{"tables_per_row": 0}"#).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_settings_path();
        let settings = AppSettings {
            tables_per_row: NonZeroUsize::new(4).unwrap(),
            log_filter: "info".to_string(),
            low_power_when_unfocused: false,
        };

        save_settings_to_path(&path, &settings).unwrap();
        let loaded: AppSettings = load_settings_from_path(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let loaded: AppSettings = load_settings_from_path(&temp_settings_path()).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let path = temp_settings_path();
        fs::write(&path, "{ not json").unwrap();
        let result = load_settings_from_path::<AppSettings>(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(SettingsError::Json(_))));
    }
}
