//! Configuration loading and management
//!
//! Handles parsing of `taskmaster.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::task::Priority;

/// Config file name, resolved inside the data directory.
pub const CONFIG_FILE: &str = "taskmaster.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Tasks configuration
    #[serde(default)]
    pub tasks: TasksConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            tasks: TasksConfig::default(),
        }
    }
}

/// Dashboard-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// How many upcoming tasks the dashboard lists
    #[serde(default = "default_dashboard_upcoming")]
    pub upcoming: usize,
}

fn default_dashboard_upcoming() -> usize {
    3
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming: default_dashboard_upcoming(),
        }
    }
}

/// Tasks-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Priority assigned when `add` runs without `--priority`
    #[serde(default = "default_task_priority")]
    pub default_priority: String,
}

fn default_task_priority() -> String {
    "low".to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_priority: default_task_priority(),
        }
    }
}

impl TasksConfig {
    /// Configured default priority as a typed value. Falls back to low
    /// when the raw string does not parse.
    pub fn default_priority(&self) -> Priority {
        self.default_priority.trim().parse().unwrap_or(Priority::Low)
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.default_priority.trim().parse::<Priority>().is_err() {
            return Err(crate::error::Error::InvalidConfig(format!(
                "tasks.default_priority '{}' is not one of low, medium, high",
                self.default_priority
            )));
        }
        Ok(())
    }
}

impl DashboardConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if self.upcoming < 1 {
            return Err(crate::error::Error::InvalidConfig(
                "dashboard.upcoming must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a `taskmaster.toml` file
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the data directory, or return defaults.
    /// A missing or unreadable file never fails a command.
    pub fn load_from_dir(data_dir: &PathBuf) -> Self {
        let config_path = data_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %err,
                    "ignoring invalid config, using defaults"
                );
                Self::default()
            }
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.dashboard.validate()?;
        self.tasks.validate()?;
        Ok(())
    }
}
