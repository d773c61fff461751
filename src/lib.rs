//! Weekly Payroll Report
//!
//! This crate computes weekly gross and net pay from an employee roster and a
//! daily attendance log, applying a late-arrival penalty and a tiered statutory
//! deduction schedule, and renders the result as a fixed-width table.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
