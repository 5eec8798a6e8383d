//! Path management for BudgetBuddy
//!
//! ## Path Resolution Order
//!
//! Datafiles:
//! 1. An explicit directory (the `--data-dir` flag or `BUDGET_BUDDY_DATA_DIR`)
//! 2. The current working directory
//!
//! Settings:
//! 1. `BUDGET_BUDDY_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-buddy` or `~/.config/budget-buddy`
//! 3. Windows: `%APPDATA%\budget-buddy`

use std::path::{Path, PathBuf};

use crate::error::BuddyError;
use crate::storage::FileStore;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "BUDGET_BUDDY_CONFIG_DIR";

/// Environment variable overriding the datafile directory
pub const DATA_DIR_ENV: &str = "BUDGET_BUDDY_DATA_DIR";

/// Manages all paths used by BudgetBuddy
#[derive(Debug, Clone)]
pub struct BuddyPaths {
    /// Where datafiles are read and written
    data_dir: PathBuf,
    /// Where config.json lives
    config_dir: PathBuf,
}

impl BuddyPaths {
    /// Resolve paths from an optional explicit data directory and the
    /// environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the working directory nor a config
    /// directory can be determined.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, BuddyError> {
        Self::resolve_with(data_dir, std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
    }

    /// Resolve paths with the config directory override already looked up
    fn resolve_with(
        data_dir: Option<PathBuf>,
        config_override: Option<PathBuf>,
    ) -> Result<Self, BuddyError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                BuddyError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        let config_dir = match config_override {
            Some(custom) => custom,
            None => resolve_default_config_dir()?,
        };

        Ok(Self {
            data_dir,
            config_dir,
        })
    }

    /// Create BuddyPaths with fixed directories (useful for testing)
    pub fn with_dirs(data_dir: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config_dir,
        }
    }

    /// Get the datafile directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// A datafile store rooted at the data directory
    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.data_dir.clone())
    }
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_config_dir() -> Result<PathBuf, BuddyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| BuddyError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-buddy"))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_config_dir() -> Result<PathBuf, BuddyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BuddyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-buddy"))
}
