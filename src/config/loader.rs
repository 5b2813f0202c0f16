//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, EventWindows, LeavePolicy};

/// Loads and provides access to the application configuration.
///
/// # File Format
///
/// ```yaml
/// company_name: Muster GmbH
/// database_path: /var/lib/staff-calendar/employees.db
/// events:
///   birthday_window_days: 30
///   anniversary_window_days: 30
///   anniversary_step_years: 5
///   leave_window_days: 14
///   leave_limit: 5
///   result_limit: 10
/// leave:
///   vacation_days_default: 30
///   count_weekends: false
/// ```
///
/// A relative `database_path` is resolved against the directory holding the
/// configuration file.
///
/// # Example
///
/// ```no_run
/// use staff_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/staff-calendar.yaml").unwrap();
/// println!("Company: {}", loader.config().company_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or:
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if the file is not valid YAML for [`AppConfig`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut config: AppConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if config.database_path.is_relative() {
            if let Some(parent) = path.parent() {
                config.database_path = parent.join(&config.database_path);
            }
        }

        debug!(path = %path_str, database = %config.database_path.display(), "Loaded configuration");
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the upcoming-events windows.
    pub fn events(&self) -> &EventWindows {
        &self.config.events
    }

    /// Returns the leave accounting policy.
    pub fn leave(&self) -> &LeavePolicy {
        &self.config.leave
    }

    /// Returns the resolved database path.
    pub fn database_path(&self) -> PathBuf {
        self.config.database_path.clone()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(AppConfig::default())
    }
}
