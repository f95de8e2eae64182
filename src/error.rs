//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during period generation,
//! payroll processing, and aggregation.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::PeriodStatus;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigurationMissing;
/// assert_eq!(error.to_string(), "No payroll settings are configured");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No payroll settings record exists; blocks generation and processing.
    #[error("No payroll settings are configured")]
    ConfigurationMissing,

    /// The referenced pay period does not exist.
    #[error("Pay period not found: {period_id}")]
    PeriodNotFound {
        /// The period id that did not resolve.
        period_id: Uuid,
    },

    /// The referenced staff payroll profile does not exist.
    #[error("Payroll profile not found for staff '{staff_id}'")]
    ProfileNotFound {
        /// The staff id with no profile.
        staff_id: String,
    },

    /// The referenced payslip does not exist.
    #[error("Payslip not found: {payslip_id}")]
    PayslipNotFound {
        /// The payslip id that did not resolve.
        payslip_id: Uuid,
    },

    /// A payslip already exists for the `(staff, period)` pair.
    #[error("Payslip already exists for staff '{staff_id}' in period {period_id}")]
    DuplicatePayslip {
        /// The staff member already paid for the period.
        staff_id: String,
        /// The period the duplicate targeted.
        period_id: Uuid,
    },

    /// A new period's date range intersects an existing period.
    #[error("Pay period {start} to {end} overlaps with an existing period")]
    OverlappingPeriod {
        /// Start of the rejected range.
        start: DateTime<Utc>,
        /// End of the rejected range.
        end: DateTime<Utc>,
    },

    /// The caller may not read or modify the requested staff member's data.
    #[error("Access denied to payroll data for staff '{staff_id}'")]
    AccessDenied {
        /// The staff id the caller attempted to access.
        staff_id: String,
    },

    /// A period status patch would move the status backward or repeat it.
    #[error("Invalid period status transition from '{from}' to '{to}'")]
    InvalidTransition {
        /// The current period status.
        from: PeriodStatus,
        /// The requested period status.
        to: PeriodStatus,
    },

    /// A staff payroll profile field was invalid or missing.
    #[error("Invalid payroll profile field '{field}': {message}")]
    InvalidProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A payroll settings field was invalid.
    #[error("Invalid payroll settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
