//! Configuration types and parsing for rv.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewer configuration from rv.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Database path, or `:memory:` for an in-memory database
    #[serde(default = "default_database")]
    pub database: String,

    /// Advance the cursor one row before every absolute seek.
    ///
    /// Some drivers mis-handle date columns unless the cursor is stepped
    /// before repositioning. DuckDB does not need it.
    #[serde(default)]
    pub advance_before_seek: bool,

    /// Log level used when neither `--verbose` nor `RV_LOG` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Maximum number of rows rendered by the CLI
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Statements executed right after connecting
    #[serde(default)]
    pub init_sql: Vec<String>,
}

fn default_database() -> String {
    ":memory:".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_rows() -> usize {
    100
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            advance_before_seek: false,
            log_level: default_log_level(),
            max_rows: default_max_rows(),
            init_sql: Vec::new(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        // An empty file means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ViewerConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory.
    /// Looks for rv.yml or rv.yaml; returns the defaults when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("rv.yml");
        let yaml_path = dir.join("rv.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            log::debug!(
                "No rv.yml found in {}, using default configuration",
                dir.display()
            );
            Ok(Self::default())
        }
    }

    /// Check values that serde cannot express
    pub fn validate(&self) -> CoreResult<()> {
        if self.database.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'database' must not be empty (use ':memory:' for an in-memory database)"
                    .to_string(),
            });
        }
        if self.max_rows == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "'max_rows' must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Whether the configured database lives in memory
    pub fn is_in_memory(&self) -> bool {
        self.database == ":memory:"
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
