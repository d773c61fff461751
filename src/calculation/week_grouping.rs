//! Grouping of attendance into employee-weeks.

use std::collections::BTreeMap;

use crate::models::AttendanceEntry;

/// Week number to the entries of that week, in input order.
pub type WeekEntries = BTreeMap<u32, Vec<AttendanceEntry>>;

/// Employee number to that employee's weeks.
///
/// Both levels are ordered, so iteration runs by employee number and then by
/// week number.
pub type EmployeeWeeks = BTreeMap<String, WeekEntries>;

/// Groups attendance entries by employee number, then by ISO week number.
///
/// Only the entry's date decides its week. Entries keep their relative input
/// order within a week.
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::group_by_employee_week;
/// use payroll_report::models::AttendanceEntry;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let entry = |date: (i32, u32, u32)| AttendanceEntry {
///     emp_number: "E1".to_string(),
///     date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
///     login: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     logout: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// };
///
/// let groups = group_by_employee_week(vec![entry((2024, 1, 1)), entry((2024, 1, 5)), entry((2024, 1, 8))]);
/// assert_eq!(groups["E1"][&1].len(), 2);
/// assert_eq!(groups["E1"][&2].len(), 1);
/// ```
pub fn group_by_employee_week<I>(entries: I) -> EmployeeWeeks
where
    I: IntoIterator<Item = AttendanceEntry>,
{
    let mut groups = EmployeeWeeks::new();

    for entry in entries {
        let week = entry.week_number();
        groups
            .entry(entry.emp_number.clone())
            .or_default()
            .entry(week)
            .or_default()
            .push(entry);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_entry(emp_number: &str, date: &str, login: &str) -> AttendanceEntry {
        AttendanceEntry {
            emp_number: emp_number.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            login: NaiveTime::parse_from_str(login, "%H:%M").unwrap(),
            logout: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_monday_and_friday_share_a_group() {
        let groups = group_by_employee_week(vec![
            make_entry("E1", "2024-03-04", "08:00"), // Monday
            make_entry("E1", "2024-03-08", "08:00"), // Friday
        ]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["E1"].len(), 1);
        assert_eq!(groups["E1"][&10].len(), 2);
    }

    #[test]
    fn test_sunday_and_next_monday_are_separate_groups() {
        let groups = group_by_employee_week(vec![
            make_entry("E1", "2024-03-10", "08:00"), // Sunday, week 10
            make_entry("E1", "2024-03-11", "08:00"), // Monday, week 11
        ]);

        let weeks: Vec<u32> = groups["E1"].keys().copied().collect();
        assert_eq!(weeks, vec![10, 11]);
    }

    #[test]
    fn test_employees_are_grouped_separately() {
        let groups = group_by_employee_week(vec![
            make_entry("E2", "2024-03-04", "08:00"),
            make_entry("E1", "2024-03-04", "08:00"),
        ]);

        let employees: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(employees, vec!["E1", "E2"]);
    }

    #[test]
    fn test_input_order_kept_within_week() {
        let groups = group_by_employee_week(vec![
            make_entry("E1", "2024-03-06", "08:20"),
            make_entry("E1", "2024-03-04", "08:10"),
            make_entry("E1", "2024-03-05", "08:30"),
        ]);

        let logins: Vec<String> = groups["E1"][&10]
            .iter()
            .map(|e| e.login.format("%H:%M").to_string())
            .collect();
        assert_eq!(logins, vec!["08:20", "08:10", "08:30"]);
    }

    #[test]
    fn test_same_week_number_in_different_years_merges() {
        let groups = group_by_employee_week(vec![
            make_entry("E1", "2024-01-03", "08:00"), // week 1 of 2024
            make_entry("E1", "2025-01-01", "08:00"), // week 1 of 2025
        ]);

        assert_eq!(groups["E1"].len(), 1);
        assert_eq!(groups["E1"][&1].len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_employee_week(Vec::new()).is_empty());
    }
}
