//! Command line entry point for the weekly payroll report.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll_report::calculation::compute_payroll;
use payroll_report::config::{ConfigLoader, PayrollConfig};
use payroll_report::error::PayrollResult;
use payroll_report::input::RecordLoader;
use payroll_report::report::{ReportFormat, render};

/// Computes weekly gross and net pay from employee and attendance tables.
#[derive(Debug, Parser)]
#[command(name = "payroll-report", version, about)]
struct Cli {
    /// YAML file with grace_period_end, employees_path and attendance_path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Employee table [default: employees.csv]
    #[arg(long, value_name = "PATH")]
    employees: Option<PathBuf>,

    /// Attendance table [default: attendance.csv]
    #[arg(long, value_name = "PATH")]
    attendance: Option<PathBuf>,

    /// Output layout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
}

fn run(cli: Cli) -> PayrollResult<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => PayrollConfig::default(),
    }
    .with_paths(cli.employees, cli.attendance);

    info!(
        employees = %config.employees_path.display(),
        attendance = %config.attendance_path.display(),
        grace_period_end = %config.grace_period_end,
        "Starting payroll run"
    );

    let employees = RecordLoader::load_employees(&config.employees_path)?;
    let attendance = RecordLoader::load_attendance(&config.attendance_path)?;
    let rows = compute_payroll(&employees, attendance, &config)?;

    let mut out = BufWriter::new(io::stdout().lock());
    render(&rows, cli.format, &mut out)
}

fn main() -> ExitCode {
    // stdout carries the report; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("payroll-report: {}", e);
            ExitCode::FAILURE
        }
    }
}
