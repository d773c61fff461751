//! Statutory deduction schedule.
//!
//! Each deduction is a pure function of one week's gross pay. Nothing is
//! compounded: every amount is computed from the same gross figure, and the
//! net is gross minus their sum. Negative gross pay is accepted and flows
//! through the same formulas.

use rust_decimal::Decimal;

use crate::models::DeductionBreakdown;

/// Gross pay up to which the lowest SSS tier applies.
pub const SSS_LOWER_BRACKET: Decimal = Decimal::from_parts(3250, 0, 0, false, 0);
/// Gross pay up to which the middle SSS tier applies.
pub const SSS_UPPER_BRACKET: Decimal = Decimal::from_parts(24750, 0, 0, false, 0);

const SSS_LOWER_CONTRIBUTION: Decimal = Decimal::from_parts(13500, 0, 0, false, 2);
const SSS_MIDDLE_CONTRIBUTION: Decimal = Decimal::from_parts(112500, 0, 0, false, 2);
const SSS_UPPER_CONTRIBUTION: Decimal = Decimal::from_parts(135000, 0, 0, false, 2);

/// PhilHealth share of gross pay (3%).
pub const PHILHEALTH_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);
/// PhilHealth ceiling.
pub const PHILHEALTH_CAP: Decimal = Decimal::from_parts(1800, 0, 0, false, 0);

/// Pag-IBIG share of gross pay (2%), uncapped.
pub const PAGIBIG_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Gross pay up to which no withholding tax is due.
pub const TAX_EXEMPT_CEILING: Decimal = Decimal::from_parts(20833, 0, 0, false, 0);
/// Gross pay up to which the 20% bracket applies.
pub const TAX_MIDDLE_CEILING: Decimal = Decimal::from_parts(33332, 0, 0, false, 0);

const TAX_MIDDLE_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);
const TAX_UPPER_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const TAX_UPPER_BASE: Decimal = Decimal::from_parts(2500, 0, 0, false, 0);

/// Returns the SSS contribution: one of three flat amounts.
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::sss_contribution;
/// use rust_decimal::Decimal;
///
/// assert_eq!(sss_contribution(Decimal::new(3250, 0)), Decimal::new(13500, 2));
/// assert_eq!(sss_contribution(Decimal::new(3251, 0)), Decimal::new(112500, 2));
/// assert_eq!(sss_contribution(Decimal::new(30000, 0)), Decimal::new(135000, 2));
/// ```
pub fn sss_contribution(gross: Decimal) -> Decimal {
    if gross <= SSS_LOWER_BRACKET {
        SSS_LOWER_CONTRIBUTION
    } else if gross <= SSS_UPPER_BRACKET {
        SSS_MIDDLE_CONTRIBUTION
    } else {
        SSS_UPPER_CONTRIBUTION
    }
}

/// Returns the PhilHealth contribution: 3% of gross, capped at 1800.
pub fn philhealth_contribution(gross: Decimal) -> Decimal {
    (gross * PHILHEALTH_RATE).min(PHILHEALTH_CAP)
}

/// Returns the Pag-IBIG contribution: 2% of gross.
pub fn pagibig_contribution(gross: Decimal) -> Decimal {
    gross * PAGIBIG_RATE
}

/// Returns the withholding tax for a week's gross pay.
///
/// | Gross                | Tax                               |
/// |----------------------|-----------------------------------|
/// | up to 20,833         | 0                                 |
/// | up to 33,332         | 20% of the excess over 20,833     |
/// | above 33,332         | 2,500 + 25% of the excess over 33,332 |
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::withholding_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(withholding_tax(Decimal::new(20833, 0)), Decimal::ZERO);
/// assert_eq!(withholding_tax(Decimal::new(25833, 0)), Decimal::new(1000, 0));
/// assert_eq!(withholding_tax(Decimal::new(37332, 0)), Decimal::new(3500, 0));
/// ```
pub fn withholding_tax(gross: Decimal) -> Decimal {
    if gross <= TAX_EXEMPT_CEILING {
        Decimal::ZERO
    } else if gross <= TAX_MIDDLE_CEILING {
        (gross - TAX_EXEMPT_CEILING) * TAX_MIDDLE_RATE
    } else {
        (gross - TAX_MIDDLE_CEILING) * TAX_UPPER_RATE + TAX_UPPER_BASE
    }
}

/// Computes every deduction for a gross amount.
pub fn calculate_deductions(gross: Decimal) -> DeductionBreakdown {
    DeductionBreakdown {
        sss: sss_contribution(gross),
        philhealth: philhealth_contribution(gross),
        pagibig: pagibig_contribution(gross),
        withholding_tax: withholding_tax(gross),
    }
}

/// Returns gross pay less the given deductions. Not clamped at zero.
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::{calculate_deductions, calculate_net_pay};
/// use rust_decimal::Decimal;
///
/// let gross = Decimal::new(1000, 0);
/// let deductions = calculate_deductions(gross);
/// // 1000 - (135 + 30 + 20 + 0)
/// assert_eq!(calculate_net_pay(gross, &deductions), Decimal::new(815, 0));
/// ```
pub fn calculate_net_pay(gross: Decimal, deductions: &DeductionBreakdown) -> Decimal {
    gross - deductions.total()
}
