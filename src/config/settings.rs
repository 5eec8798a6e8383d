//! User settings for BudgetBuddy
//!
//! Preferences for the terminal presenter and logging. None of these affect
//! how a budget is validated or summarized.

use serde::Deserialize;

use super::paths::BuddyPaths;
use crate::error::BuddyError;

/// User settings for BudgetBuddy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "budget_buddy=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Show the splash screen before asking for a name
    #[serde(default = "default_true")]
    pub show_splash: bool,

    /// Ask for confirmation before deleting a category
    #[serde(default = "default_true")]
    pub confirm_deletes: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_splash: true,
            confirm_deletes: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &BuddyPaths) -> Result<Self, BuddyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BuddyError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BuddyError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths(temp_dir: &TempDir) -> BuddyPaths {
        BuddyPaths::with_dirs(temp_dir.path().to_path_buf(), temp_dir.path().join("config"))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_filter, "warn");
        assert!(settings.show_splash);
        assert!(settings.confirm_deletes);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Settings::load_or_default(&temp_paths(&temp_dir)).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_full_file_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::create_dir_all(paths.config_dir()).unwrap();
        std::fs::write(
            paths.settings_file(),
            r#"{"log_filter": "budget_buddy=debug", "show_splash": false, "confirm_deletes": false}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(
            loaded,
            Settings {
                log_filter: "budget_buddy=debug".into(),
                show_splash: false,
                confirm_deletes: false,
            }
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::create_dir_all(paths.config_dir()).unwrap();
        std::fs::write(paths.settings_file(), r#"{"show_splash": false}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert!(!loaded.show_splash);
        assert!(loaded.confirm_deletes);
        assert_eq!(loaded.log_filter, "warn");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::create_dir_all(paths.config_dir()).unwrap();
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, BuddyError::Config(_)));
    }
}
