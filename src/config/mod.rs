//! Configuration loading for the payroll report.
//!
//! A run is driven by a [`PayrollConfig`]: the grace-period cutoff and the two
//! input table paths. The defaults reproduce the standard run; a YAML file can
//! override any of them.
//!
//! # Example
//!
//! ```no_run
//! use payroll_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./fixtures/payroll.yaml").unwrap().into_config();
//! println!("Reading {}", config.employees_path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_ATTENDANCE_PATH, DEFAULT_EMPLOYEES_PATH, DEFAULT_GRACE_PERIOD_END, PayrollConfig,
};
