//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_period;
mod payslip;
mod settings;
mod staff_profile;
mod work_session;

pub use pay_period::{PayPeriod, PeriodStatus};
pub use payslip::{Bonus, Deduction, PaySlip, PaySlipStatus};
pub use settings::{PayFrequency, PayrollSettings};
pub use staff_profile::{
    BankDetails, BankSummary, PaymentMethod, StaffPayrollProfile, StaffStatus, TaxWithholdings,
};
pub use work_session::{SessionStatus, WorkSession};
