//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```yaml
/// grace_period_end: "08:11"
/// employees_path: employees.csv
/// attendance_path: attendance.csv
/// ```
///
/// All keys are optional.
///
/// # Example
///
/// ```no_run
/// use payroll_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./fixtures/payroll.yaml")?;
/// println!("Late after {}", loader.config().grace_period_end);
/// # Ok::<(), payroll_report::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        debug!(path = %path_str, config = ?loader.config, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text. `source` names the text in errors.
    pub fn from_yaml(content: &str, source: &str) -> PayrollResult<Self> {
        // An empty document deserializes to unit, not to a struct of defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
