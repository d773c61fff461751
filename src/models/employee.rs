//! Employee model.
//!
//! This module defines the Employee struct for representing workers on the
//! roster, and the roster mapping keyed by employee number.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The loaded roster: employee number to employee.
pub type EmployeeRoster = HashMap<String, Employee>;

/// Represents an employee on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee number.
    pub emp_number: String,
    /// Display name.
    pub name: String,
    /// Birthday exactly as written in the roster. Never parsed.
    pub birthday: String,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
}
