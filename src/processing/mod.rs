//! Payroll processing.
//!
//! This module converts raw work sessions into hours with an overtime
//! split, and orchestrates the batch that produces one payslip per
//! active staff member for a pay period.

mod payroll_run;
mod session_hours;

pub use payroll_run::{PayrollRunReport, StaffFailure, process_payroll};
pub use session_hours::{
    SessionHours, aggregate_session_hours, per_session_overtime_threshold,
};
