//! Configuration types for the payroll report.
//!
//! These are deserialized from an optional YAML file. Every field has a default
//! matching the standard run, so an empty file is a valid configuration.

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::Deserialize;

use crate::models::deserialize_time_of_day;

/// Default path of the employee roster table.
pub const DEFAULT_EMPLOYEES_PATH: &str = "employees.csv";

/// Default path of the attendance table.
pub const DEFAULT_ATTENDANCE_PATH: &str = "attendance.csv";

/// Logins strictly after this time of day are late.
pub const DEFAULT_GRACE_PERIOD_END: NaiveTime = match NaiveTime::from_hms_opt(8, 11, 0) {
    Some(time) => time,
    None => panic!("grace period constant is not a valid time"),
};

/// Settings for one payroll run.
///
/// # Example
///
/// ```
/// use payroll_report::config::PayrollConfig;
/// use chrono::NaiveTime;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.grace_period_end, NaiveTime::from_hms_opt(8, 11, 0).unwrap());
/// assert_eq!(config.employees_path.to_str(), Some("employees.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    /// Cutoff after which a login incurs a late penalty.
    #[serde(deserialize_with = "deserialize_time_of_day")]
    pub grace_period_end: NaiveTime,
    /// Path of the employee roster table.
    pub employees_path: PathBuf,
    /// Path of the attendance table.
    pub attendance_path: PathBuf,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            grace_period_end: DEFAULT_GRACE_PERIOD_END,
            employees_path: PathBuf::from(DEFAULT_EMPLOYEES_PATH),
            attendance_path: PathBuf::from(DEFAULT_ATTENDANCE_PATH),
        }
    }
}

impl PayrollConfig {
    /// Replaces the input paths with any that were given explicitly.
    pub fn with_paths(
        mut self,
        employees_path: Option<PathBuf>,
        attendance_path: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = employees_path {
            self.employees_path = path;
        }
        if let Some(path) = attendance_path {
            self.attendance_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grace_period_is_0811() {
        assert_eq!(
            DEFAULT_GRACE_PERIOD_END,
            NaiveTime::from_hms_opt(8, 11, 0).unwrap()
        );
    }

    #[test]
    fn test_with_paths_overrides_only_given_paths() {
        let config =
            PayrollConfig::default().with_paths(Some(PathBuf::from("/data/roster.csv")), None);

        assert_eq!(config.employees_path, PathBuf::from("/data/roster.csv"));
        assert_eq!(config.attendance_path, PathBuf::from(DEFAULT_ATTENDANCE_PATH));
    }

    #[test]
    fn test_deserialize_partial_config_keeps_defaults() {
        let config: PayrollConfig = serde_yaml::from_str("grace_period_end: \"08:15\"").unwrap();

        assert_eq!(
            config.grace_period_end,
            NaiveTime::from_hms_opt(8, 15, 0).unwrap()
        );
        assert_eq!(config.employees_path, PathBuf::from(DEFAULT_EMPLOYEES_PATH));
    }

    #[test]
    fn test_deserialize_rejects_bad_time() {
        let result: Result<PayrollConfig, _> = serde_yaml::from_str("grace_period_end: late");
        assert!(result.is_err());

        let result: Result<PayrollConfig, _> = serde_yaml::from_str("grace_period_end: \"8:11\"");
        assert!(result.is_err());
    }
}
