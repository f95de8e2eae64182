//! Payroll period and processing engine.
//!
//! This crate generates non-overlapping pay periods from a recurring frequency
//! rule, converts raw time-tracking sessions into hours, overtime, and gross pay
//! per staff member per period, and aggregates historical payslips into
//! year-to-date summaries with per-category deduction breakdowns.

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod processing;
pub mod schedule;
pub mod service;
pub mod store;
pub mod ytd;
