//! Core data models for the payroll report.
//!
//! This module contains the input records read from the two tables and the
//! rows the report is built from.

mod attendance;
mod employee;
mod payroll_row;

pub use attendance::{AttendanceEntry, parse_calendar_date, parse_time_of_day};
pub(crate) use attendance::deserialize_time_of_day;
pub use employee::{Employee, EmployeeRoster};
pub use payroll_row::{DeductionBreakdown, PayrollRow};
