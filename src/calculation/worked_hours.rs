//! Worked hours with the late-arrival penalty.
//!
//! A login strictly after the grace-period cutoff costs the minutes between the
//! cutoff and the login, as a fractional-hour deduction. The time between login
//! and logout is always added, even when logout is earlier than login.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::AttendanceEntry;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Converts whole minutes to hours.
fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / MINUTES_PER_HOUR
}

/// Returns the whole minutes a login falls after the grace-period cutoff.
///
/// Zero when the login is at or before the cutoff. Seconds are truncated, so a
/// login at 08:11:45 against an 08:11 cutoff is zero minutes late.
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::late_minutes;
/// use chrono::NaiveTime;
///
/// let cutoff = NaiveTime::from_hms_opt(8, 11, 0).unwrap();
/// assert_eq!(late_minutes(NaiveTime::from_hms_opt(8, 11, 0).unwrap(), cutoff), 0);
/// assert_eq!(late_minutes(NaiveTime::from_hms_opt(8, 41, 0).unwrap(), cutoff), 30);
/// ```
pub fn late_minutes(login: NaiveTime, grace_period_end: NaiveTime) -> i64 {
    if login > grace_period_end {
        login.signed_duration_since(grace_period_end).num_minutes()
    } else {
        0
    }
}

/// Returns the late penalty in hours for a login.
pub fn late_penalty_hours(login: NaiveTime, grace_period_end: NaiveTime) -> Decimal {
    minutes_to_hours(late_minutes(login, grace_period_end))
}

/// Returns the hours between login and logout.
///
/// Negative when logout is earlier than login; no overnight wrap is assumed.
pub fn attended_hours(entry: &AttendanceEntry) -> Decimal {
    minutes_to_hours(entry.logout.signed_duration_since(entry.login).num_minutes())
}

/// Calculates the worked hours for a group of entries.
///
/// Entries are applied in the given order: for each one the late penalty is
/// subtracted, then the attended hours are added.
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::calculate_worked_hours;
/// use payroll_report::models::AttendanceEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = AttendanceEntry {
///     emp_number: "E1".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     login: NaiveTime::from_hms_opt(8, 41, 0).unwrap(),
///     logout: NaiveTime::from_hms_opt(17, 11, 0).unwrap(),
/// };
/// let cutoff = NaiveTime::from_hms_opt(8, 11, 0).unwrap();
///
/// // 8.5 hours attended, 0.5 hour late penalty
/// assert_eq!(calculate_worked_hours(&[entry], cutoff), Decimal::new(80, 1));
/// ```
pub fn calculate_worked_hours(entries: &[AttendanceEntry], grace_period_end: NaiveTime) -> Decimal {
    let mut total_hours = Decimal::ZERO;

    for entry in entries {
        let penalty = late_penalty_hours(entry.login, grace_period_end);
        if !penalty.is_zero() {
            debug!(
                emp_number = %entry.emp_number,
                date = %entry.date,
                login = %entry.login,
                penalty_hours = %penalty.round_dp(4),
                "Late login penalty"
            );
        }
        if entry.is_inverted() {
            debug!(
                emp_number = %entry.emp_number,
                date = %entry.date,
                "Logout before login, counting negative hours"
            );
        }

        total_hours -= penalty;
        total_hours += attended_hours(entry);
    }

    total_hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(hms: &str) -> NaiveTime {
        NaiveTime::parse_from_str(hms, "%H:%M:%S").unwrap()
    }

    fn cutoff() -> NaiveTime {
        time("08:11:00")
    }

    fn make_entry(date: &str, login: &str, logout: &str) -> AttendanceEntry {
        AttendanceEntry {
            emp_number: "E1".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            login: time(login),
            logout: time(logout),
        }
    }

    #[test]
    fn test_login_at_cutoff_has_no_penalty() {
        assert_eq!(late_penalty_hours(time("08:11:00"), cutoff()), Decimal::ZERO);
    }

    #[test]
    fn test_login_before_cutoff_has_no_penalty() {
        assert_eq!(late_penalty_hours(time("07:45:00"), cutoff()), Decimal::ZERO);
    }

    #[test]
    fn test_login_thirty_minutes_late() {
        assert_eq!(late_penalty_hours(time("08:41:00"), cutoff()), dec("0.5"));
    }

    #[test]
    fn test_partial_minute_late_is_truncated() {
        assert_eq!(late_minutes(time("08:11:59"), cutoff()), 0);
        assert_eq!(late_minutes(time("08:12:59"), cutoff()), 1);
    }

    #[test]
    fn test_custom_cutoff() {
        assert_eq!(late_minutes(time("09:15:00"), time("09:00:00")), 15);
        assert_eq!(late_minutes(time("08:30:00"), time("09:00:00")), 0);
    }

    #[test]
    fn test_attended_hours_full_day() {
        let entry = make_entry("2024-01-01", "08:00:00", "17:00:00");
        assert_eq!(attended_hours(&entry), dec("9"));
    }

    #[test]
    fn test_attended_hours_negative_when_inverted() {
        let entry = make_entry("2024-01-01", "17:00:00", "08:00:00");
        assert_eq!(attended_hours(&entry), dec("-9"));
    }

    #[test]
    fn test_week_with_one_late_day() {
        let entries = vec![
            make_entry("2024-01-01", "08:00:00", "17:00:00"),
            make_entry("2024-01-03", "08:30:00", "17:00:00"),
        ];

        // 540 + 510 - 19 = 1031 minutes
        let hours = calculate_worked_hours(&entries, cutoff());
        assert_eq!(hours.round_dp(4), dec("17.1833"));
        assert_eq!((hours * dec("60")).round_dp(6), dec("1031"));
    }

    #[test]
    fn test_late_and_inverted_entry_still_penalised() {
        // Login 09:11 (60 min late), logout 08:11 (-60 min attended)
        let entries = vec![make_entry("2024-01-01", "09:11:00", "08:11:00")];
        assert_eq!(calculate_worked_hours(&entries, cutoff()), dec("-2"));
    }

    #[test]
    fn test_no_entries_is_zero_hours() {
        assert_eq!(calculate_worked_hours(&[], cutoff()), Decimal::ZERO);
    }
}
