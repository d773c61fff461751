//! Calculation logic for the payroll report.
//!
//! This module contains the week grouping of attendance, worked hours with the
//! late-arrival penalty, the statutory deduction schedule, and the pipeline
//! that combines them into payroll rows.

mod deductions;
mod payroll;
mod week_grouping;
mod worked_hours;

pub use deductions::{
    PAGIBIG_RATE, PHILHEALTH_CAP, PHILHEALTH_RATE, SSS_LOWER_BRACKET, SSS_UPPER_BRACKET,
    TAX_EXEMPT_CEILING, TAX_MIDDLE_CEILING, calculate_deductions, calculate_net_pay,
    pagibig_contribution, philhealth_contribution, sss_contribution, withholding_tax,
};
pub use payroll::{WeekPay, calculate_week_pay, compute_payroll};
pub use week_grouping::{EmployeeWeeks, WeekEntries, group_by_employee_week};
pub use worked_hours::{attended_hours, calculate_worked_hours, late_minutes, late_penalty_hours};
