//! Error types for the payroll report.
//!
//! Every fatal condition of a run is a variant of [`PayrollError`]. Business-rule
//! outcomes such as attendance for an unknown employee are not errors and never
//! appear here.

use thiserror::Error;

/// The main error type for the payroll report.
///
/// All fallible operations return this error type. There is no recovery layer:
/// any variant reaching the binary terminates the run.
///
/// # Example
///
/// ```
/// use payroll_report::error::PayrollError;
///
/// let error = PayrollError::FileNotFound {
///     path: "employees.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: employees.csv");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An input table could not be opened.
    #[error("Input file not found: {path}")]
    FileNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// A data row of an input table could not be parsed.
    #[error("Malformed row in '{path}' at line {line}: {message}")]
    MalformedRow {
        /// The table the row came from.
        path: String,
        /// The 1-based line number of the row.
        line: u64,
        /// A description of what made the row malformed.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A week's pay could not be represented, e.g. an hourly rate so large that
    /// gross pay overflows.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the failed calculation.
        message: String,
    },

    /// The report could not be written.
    #[error("Failed to write report: {message}")]
    Output {
        /// A description of the write failure.
        message: String,
    },
}

impl From<std::io::Error> for PayrollError {
    fn from(err: std::io::Error) -> Self {
        PayrollError::Output {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_displays_path() {
        let error = PayrollError::FileNotFound {
            path: "attendance.csv".to_string(),
        };
        assert_eq!(error.to_string(), "Input file not found: attendance.csv");
    }

    #[test]
    fn test_malformed_row_displays_path_line_and_message() {
        let error = PayrollError::MalformedRow {
            path: "employees.csv".to_string(),
            line: 3,
            message: "invalid hourly rate 'abc'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed row in 'employees.csv' at line 3: invalid hourly rate 'abc'"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "payroll.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'payroll.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = PayrollError::Calculation {
            message: "gross pay overflows".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: gross pay overflows");
    }

    #[test]
    fn test_io_error_converts_to_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: PayrollError = io.into();
        assert_eq!(error.to_string(), "Failed to write report: pipe closed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_file_not_found() -> PayrollResult<()> {
            Err(PayrollError::FileNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_file_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
