//! Payroll output models.
//!
//! This module contains the [`PayrollRow`] produced for every employee-week and
//! the [`DeductionBreakdown`] that explains the gap between gross and net pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory deductions taken from one week's gross pay.
///
/// # Example
///
/// ```
/// use payroll_report::models::DeductionBreakdown;
/// use rust_decimal::Decimal;
///
/// let deductions = DeductionBreakdown {
///     sss: Decimal::new(13500, 2),
///     philhealth: Decimal::new(3000, 2),
///     pagibig: Decimal::new(2000, 2),
///     withholding_tax: Decimal::ZERO,
/// };
/// assert_eq!(deductions.total(), Decimal::new(18500, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Social Security System contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG fund contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
}

impl DeductionBreakdown {
    /// Sum of all deductions.
    pub fn total(&self) -> Decimal {
        self.sss + self.philhealth + self.pagibig + self.withholding_tax
    }
}

/// One line of the payroll report: an employee's pay for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// Employee number.
    pub emp_number: String,
    /// Employee display name.
    pub name: String,
    /// Birthday as given in the roster.
    pub birthday: String,
    /// ISO week number the row covers.
    pub week: u32,
    /// Worked hours after late penalties.
    pub total_hours: Decimal,
    /// Gross pay (hours x rate). May be negative.
    pub gross_pay: Decimal,
    /// The deductions applied to `gross_pay`.
    pub deductions: DeductionBreakdown,
    /// Gross pay minus all deductions. May be negative.
    pub net_pay: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_sums_every_deduction() {
        let deductions = DeductionBreakdown {
            sss: dec("1125.00"),
            philhealth: dec("51.55"),
            pagibig: dec("34.37"),
            withholding_tax: dec("0"),
        };
        assert_eq!(deductions.total(), dec("1210.92"));
    }

    #[test]
    fn test_row_serializes_money_as_strings() {
        let row = PayrollRow {
            emp_number: "E1".to_string(),
            name: "Ana".to_string(),
            birthday: "1990-05-05".to_string(),
            week: 1,
            total_hours: dec("9"),
            gross_pay: dec("900"),
            deductions: DeductionBreakdown {
                sss: dec("135.00"),
                philhealth: dec("27.00"),
                pagibig: dec("18.00"),
                withholding_tax: dec("0"),
            },
            net_pay: dec("720.00"),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["week"], 1);
        assert_eq!(json["gross_pay"], "900");
        assert_eq!(json["deductions"]["sss"], "135.00");
        assert_eq!(json["net_pay"], "720.00");
    }
}
