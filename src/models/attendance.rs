//! Attendance entry model and calendar date / time-of-day parsing.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted time-of-day layouts, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Returns true if `value` has the layout of `shape`, where `9` stands for any
/// ASCII digit and every other byte must match exactly.
fn has_shape(value: &[u8], shape: &[u8]) -> bool {
    value.len() == shape.len()
        && value.iter().zip(shape).all(|(&v, &s)| match s {
            b'9' => v.is_ascii_digit(),
            _ => v == s,
        })
}

fn is_iso_time_text(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.len() {
        5 => has_shape(bytes, b"99:99"),
        8 => has_shape(bytes, b"99:99:99"),
        // one to nine fraction digits
        10..=18 => {
            has_shape(&bytes[..9], b"99:99:99.") && bytes[9..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// Parses an ISO calendar date in exact `YYYY-MM-DD` form.
///
/// Unpadded components, signed or extended years and impossible dates are
/// rejected.
///
/// # Examples
///
/// ```
/// use payroll_report::models::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_calendar_date("2024-01-03"), NaiveDate::from_ymd_opt(2024, 1, 3));
/// assert_eq!(parse_calendar_date("2024-1-3"), None);
/// assert_eq!(parse_calendar_date("+2024-01-03"), None);
/// ```
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if !has_shape(value.as_bytes(), b"9999-99-99") {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parses an ISO time of day in `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff` form.
///
/// Every component must be two digits. Leap seconds are rejected.
///
/// # Examples
///
/// ```
/// use payroll_report::models::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("08:11"), NaiveTime::from_hms_opt(8, 11, 0));
/// assert_eq!(parse_time_of_day("17:00:30"), NaiveTime::from_hms_opt(17, 0, 30));
/// assert_eq!(parse_time_of_day("8:11"), None);
/// assert_eq!(parse_time_of_day("8am"), None);
/// ```
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    if !is_iso_time_text(value) {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .filter(|time| time.nanosecond() < 1_000_000_000)
}

/// Serde adapter for time-of-day fields that accepts the same layouts as the
/// attendance table.
pub(crate) fn deserialize_time_of_day<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time_of_day(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day '{}'", raw)))
}

/// One day of attendance for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Employee number; may not match anyone on the roster.
    pub emp_number: String,
    /// The calendar date worked.
    pub date: NaiveDate,
    /// Time of day the employee logged in.
    pub login: NaiveTime,
    /// Time of day the employee logged out. Not checked against `login`.
    pub logout: NaiveTime,
}

impl AttendanceEntry {
    /// Returns the ISO-8601 week number of the entry's date.
    ///
    /// The week-based year is not part of the result, so the last days of
    /// December can share week 1 with the following January.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_report::models::AttendanceEntry;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let entry = AttendanceEntry {
    ///     emp_number: "E1".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
    ///     login: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     logout: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    /// };
    /// assert_eq!(entry.week_number(), 1);
    /// ```
    pub fn week_number(&self) -> u32 {
        self.date.iso_week().week()
    }

    /// Returns true if logout is earlier than login.
    pub fn is_inverted(&self) -> bool {
        self.logout < self.login
    }
}
