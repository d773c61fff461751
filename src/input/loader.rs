//! Table loading functionality.
//!
//! This module provides the [`RecordLoader`] type that turns the employee and
//! attendance tables into typed records.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AttendanceEntry, Employee, EmployeeRoster, parse_calendar_date, parse_time_of_day,
};

/// Columns in the employee table: number, name, birthday, hourly rate.
pub const EMPLOYEE_COLUMNS: usize = 4;

/// Columns in the attendance table: number, date, login, logout.
pub const ATTENDANCE_COLUMNS: usize = 4;

/// Loads the employee and attendance tables.
///
/// Both tables are comma-separated with a header row. Fields are split on
/// every comma; quoting is not supported. A blank line before the last data row
/// counts as a malformed row. The first malformed row aborts the load with
/// [`PayrollError::MalformedRow`].
///
/// # Example
///
/// ```
/// use payroll_report::input::RecordLoader;
///
/// let table = "empNumber,name,birthday,hourlyRate\nE1,Ana Cruz,1990-05-05,100\n";
/// let roster = RecordLoader::read_employees(table.as_bytes(), "inline").unwrap();
/// assert_eq!(roster["E1"].name, "Ana Cruz");
/// ```
pub struct RecordLoader;

impl RecordLoader {
    /// Loads the employee roster from a file.
    ///
    /// Returns `FileNotFound` if the file cannot be opened.
    pub fn load_employees<P: AsRef<Path>>(path: P) -> PayrollResult<EmployeeRoster> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = open_table(path, &source)?;

        let roster = Self::read_employees(file, &source)?;
        info!(path = %source, employees = roster.len(), "Loaded employee roster");
        Ok(roster)
    }

    /// Loads attendance entries from a file, in file order.
    ///
    /// Returns `FileNotFound` if the file cannot be opened.
    pub fn load_attendance<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<AttendanceEntry>> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = open_table(path, &source)?;

        let entries = Self::read_attendance(file, &source)?;
        info!(path = %source, entries = entries.len(), "Loaded attendance log");
        Ok(entries)
    }

    /// Parses an employee table from any reader. `source` names the table in errors.
    ///
    /// A later row with an employee number already seen replaces the earlier one.
    pub fn read_employees<R: Read>(reader: R, source: &str) -> PayrollResult<EmployeeRoster> {
        let mut roster = EmployeeRoster::new();

        for_each_row(reader, source, EMPLOYEE_COLUMNS, |row| {
            let employee = Employee {
                emp_number: row.field(0).to_string(),
                name: row.field(1).to_string(),
                birthday: row.field(2).to_string(),
                hourly_rate: row.decimal(3, "hourly rate")?,
            };

            if let Some(previous) = roster.insert(employee.emp_number.clone(), employee) {
                debug!(
                    emp_number = %previous.emp_number,
                    line = row.line,
                    "Duplicate employee number, keeping later row"
                );
            }
            Ok(())
        })?;

        Ok(roster)
    }

    /// Parses an attendance table from any reader. `source` names the table in errors.
    pub fn read_attendance<R: Read>(
        reader: R,
        source: &str,
    ) -> PayrollResult<Vec<AttendanceEntry>> {
        let mut entries = Vec::new();

        for_each_row(reader, source, ATTENDANCE_COLUMNS, |row| {
            entries.push(AttendanceEntry {
                emp_number: row.field(0).to_string(),
                date: row.date(1, "date")?,
                login: row.time(2, "login time")?,
                logout: row.time(3, "logout time")?,
            });
            Ok(())
        })?;

        Ok(entries)
    }
}

fn open_table(path: &Path, source: &str) -> PayrollResult<File> {
    File::open(path).map_err(|_| PayrollError::FileNotFound {
        path: source.to_string(),
    })
}

fn table_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_reader(reader)
}

/// Feeds every data row of a table to `on_row`, stopping at the first error.
///
/// The csv reader drops empty lines silently, so a gap in the line numbers of
/// consecutive records is reported as a blank row at the first missing line.
fn for_each_row<R, F>(
    reader: R,
    source: &str,
    columns: usize,
    mut on_row: F,
) -> PayrollResult<()>
where
    R: Read,
    F: FnMut(Row<'_>) -> PayrollResult<()>,
{
    // the header occupies line 1
    let mut previous_line = 1;

    for record in table_reader(reader).records() {
        let row = Row::new(source, record)?;
        if row.line > previous_line + 1 {
            return Err(PayrollError::MalformedRow {
                path: source.to_string(),
                line: previous_line + 1,
                message: "blank line".to_string(),
            });
        }
        previous_line = row.line;

        row.expect_columns(columns)?;
        on_row(row)?;
    }

    Ok(())
}

/// A data row with the context needed to report problems with it.
struct Row<'a> {
    source: &'a str,
    line: u64,
    record: StringRecord,
}

impl<'a> Row<'a> {
    fn new(source: &'a str, record: Result<StringRecord, csv::Error>) -> PayrollResult<Self> {
        let record = record.map_err(|e| PayrollError::MalformedRow {
            path: source.to_string(),
            line: e.position().map_or(0, |p| p.line()),
            message: e.to_string(),
        })?;

        Ok(Self {
            source,
            line: record.position().map_or(0, |p| p.line()),
            record,
        })
    }

    fn expect_columns(&self, columns: usize) -> PayrollResult<()> {
        if self.record.len() != columns {
            return Err(self.malformed(format!(
                "expected {} columns, found {}",
                columns,
                self.record.len()
            )));
        }
        Ok(())
    }

    fn field(&self, index: usize) -> &str {
        self.record.get(index).unwrap_or_default()
    }

    fn malformed(&self, message: String) -> PayrollError {
        PayrollError::MalformedRow {
            path: self.source.to_string(),
            line: self.line,
            message,
        }
    }

    fn decimal(&self, index: usize, name: &str) -> PayrollResult<Decimal> {
        let raw = self.field(index).trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| self.malformed(format!("invalid {} '{}'", name, raw)))
    }

    fn date(&self, index: usize, name: &str) -> PayrollResult<NaiveDate> {
        let raw = self.field(index);
        parse_calendar_date(raw)
            .ok_or_else(|| self.malformed(format!("invalid {} '{}'", name, raw)))
    }

    fn time(&self, index: usize, name: &str) -> PayrollResult<NaiveTime> {
        let raw = self.field(index);
        parse_time_of_day(raw)
            .ok_or_else(|| self.malformed(format!("invalid {} '{}'", name, raw)))
    }
}
