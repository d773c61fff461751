//! Report rendering.
//!
//! Turns computed payroll rows into the fixed-width console table or a JSON
//! document. Rendering performs no calculation; the only failure is the
//! writer rejecting output.

use std::io::Write;

use clap::ValueEnum;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::PayrollResult;
use crate::models::PayrollRow;

/// Output layout of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width text table.
    #[default]
    Table,
    /// Pretty-printed JSON array including hours and deductions.
    Json,
}

const HEADER_LABELS: [&str; 6] = ["Emp No", "Name", "Birthday", "Week", "Gross", "Net"];

/// Formats a money amount with two decimals, rounding half away from zero.
///
/// # Examples
///
/// ```
/// use payroll_report::report::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(900, 0)), "900.00");
/// assert_eq!(format_money(Decimal::new(5074165, 4)), "507.42");
/// assert_eq!(format_money(Decimal::new(-12345, 3)), "-12.35");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Returns the header line of the table, without a trailing newline.
pub fn format_header() -> String {
    let [emp_number, name, birthday, week, gross, net] = HEADER_LABELS;
    format!(
        "{:<10} {:<20} {:<12} {:<6} {:<10} {:<10}",
        emp_number, name, birthday, week, gross, net
    )
}

/// Formats one table row, without a trailing newline.
///
/// Columns are left-justified and space-padded to 10, 20, 12, 6, 10 and 10
/// characters. Longer values are written in full.
pub fn format_row(row: &PayrollRow) -> String {
    format!(
        "{:<10} {:<20} {:<12} {:<6} {:<10} {:<10}",
        row.emp_number,
        row.name,
        row.birthday,
        row.week,
        format_money(row.gross_pay),
        format_money(row.net_pay)
    )
}

/// Writes the header and one line per row.
pub fn render_table<W: Write>(rows: &[PayrollRow], out: &mut W) -> PayrollResult<()> {
    writeln!(out, "{}", format_header())?;
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the rows as a pretty-printed JSON array.
pub fn render_json<W: Write>(rows: &[PayrollRow], out: &mut W) -> PayrollResult<()> {
    serde_json::to_writer_pretty(&mut *out, rows).map_err(std::io::Error::from)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes the rows in the requested format.
pub fn render<W: Write>(
    rows: &[PayrollRow],
    format: ReportFormat,
    out: &mut W,
) -> PayrollResult<()> {
    match format {
        ReportFormat::Table => render_table(rows, out),
        ReportFormat::Json => render_json(rows, out),
    }
}
