//! The payroll pipeline.
//!
//! [`compute_payroll`] runs the whole computation: group attendance into
//! employee-weeks, then price each group against the employee's rate. It does
//! no I/O, so it can be driven from files, tests or benchmarks alike.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, DeductionBreakdown, EmployeeRoster, PayrollRow};

use super::deductions::{calculate_deductions, calculate_net_pay};
use super::week_grouping::group_by_employee_week;
use super::worked_hours::calculate_worked_hours;

/// The pay for one employee-week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPay {
    /// Worked hours after late penalties.
    pub total_hours: Decimal,
    /// Worked hours times the hourly rate.
    pub gross_pay: Decimal,
    /// Deductions computed from `gross_pay`.
    pub deductions: DeductionBreakdown,
    /// Gross pay less deductions.
    pub net_pay: Decimal,
}

/// Calculates gross and net pay for one employee-week.
///
/// # Arguments
///
/// * `entries` - The week's attendance, in the order it should be applied
/// * `hourly_rate` - The employee's hourly rate
/// * `grace_period_end` - Logins after this time of day are penalised
///
/// # Errors
///
/// Returns `Calculation` if hours times rate does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::calculate_week_pay;
/// use payroll_report::models::AttendanceEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = AttendanceEntry {
///     emp_number: "E1".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     login: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     logout: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// };
/// let cutoff = NaiveTime::from_hms_opt(8, 11, 0).unwrap();
///
/// let pay = calculate_week_pay(&[entry], Decimal::new(100, 0), cutoff).unwrap();
/// assert_eq!(pay.gross_pay, Decimal::new(900, 0));
/// // 900 - (135 + 27 + 18 + 0)
/// assert_eq!(pay.net_pay, Decimal::new(720, 0));
/// ```
pub fn calculate_week_pay(
    entries: &[AttendanceEntry],
    hourly_rate: Decimal,
    grace_period_end: NaiveTime,
) -> PayrollResult<WeekPay> {
    let total_hours = calculate_worked_hours(entries, grace_period_end);
    let gross_pay = total_hours
        .checked_mul(hourly_rate)
        .ok_or_else(|| PayrollError::Calculation {
            message: format!(
                "gross pay overflows for {} hours at rate {}",
                total_hours.round_dp(4),
                hourly_rate
            ),
        })?;
    let deductions = calculate_deductions(gross_pay);
    let net_pay = calculate_net_pay(gross_pay, &deductions);

    Ok(WeekPay {
        total_hours,
        gross_pay,
        deductions,
        net_pay,
    })
}

/// Computes one payroll row per employee-week.
///
/// Rows come out ordered by employee number, then week number. Attendance for
/// an employee number missing from the roster produces no rows. The first
/// week whose pay cannot be computed aborts the run.
pub fn compute_payroll<I>(
    employees: &EmployeeRoster,
    attendance: I,
    config: &PayrollConfig,
) -> PayrollResult<Vec<PayrollRow>>
where
    I: IntoIterator<Item = AttendanceEntry>,
{
    let groups = group_by_employee_week(attendance);
    let mut rows = Vec::new();

    for (emp_number, weeks) in &groups {
        let Some(employee) = employees.get(emp_number) else {
            debug!(
                emp_number = %emp_number,
                weeks = weeks.len(),
                "Skipping attendance for unknown employee"
            );
            continue;
        };

        for (&week, entries) in weeks {
            let pay = calculate_week_pay(entries, employee.hourly_rate, config.grace_period_end)
                .map_err(|e| match e {
                    PayrollError::Calculation { message } => PayrollError::Calculation {
                        message: format!("employee {} week {}: {}", emp_number, week, message),
                    },
                    other => other,
                })?;
            debug!(
                emp_number = %emp_number,
                week,
                entries = entries.len(),
                hours = %pay.total_hours.round_dp(4),
                gross = %pay.gross_pay.round_dp(2),
                net = %pay.net_pay.round_dp(2),
                "Computed weekly pay"
            );

            rows.push(PayrollRow {
                emp_number: employee.emp_number.clone(),
                name: employee.name.clone(),
                birthday: employee.birthday.clone(),
                week,
                total_hours: pay.total_hours,
                gross_pay: pay.gross_pay,
                deductions: pay.deductions,
                net_pay: pay.net_pay,
            });
        }
    }

    info!(employees = groups.len(), rows = rows.len(), "Computed payroll");
    Ok(rows)
}
