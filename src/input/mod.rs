//! Input table loading.
//!
//! Reads the employee roster and the attendance log into typed records. All
//! parse failures are fatal.

mod loader;

pub use loader::{ATTENDANCE_COLUMNS, EMPLOYEE_COLUMNS, RecordLoader};
