//! Report output for the payroll rows.

mod renderer;

pub use renderer::{
    ReportFormat, format_header, format_money, format_row, render, render_json, render_table,
};
