//! Payroll settings model.
//!
//! This module defines the [`PayrollSettings`] record and the
//! [`PayFrequency`] enum that drives pay period generation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The recurring rule used to generate pay periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// One period per calendar week (7-day inclusive window).
    Weekly,
    /// One period per two calendar weeks (14-day inclusive window).
    Biweekly,
    /// Two uneven periods per month: the 1st through the 15th, and the
    /// 16th through the end of the month.
    Semimonthly,
    /// One period per calendar month.
    Monthly,
}

/// A payroll configuration record.
///
/// At most one settings record is current (the latest by creation order);
/// older records are retained as history and never mutated.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayFrequency, PayrollSettings};
/// use rust_decimal_macros::dec;
///
/// let settings = PayrollSettings::new(
///     PayFrequency::Weekly,
///     1,
///     dec!(40),
///     dec!(1.5),
///     dec!(2.0),
///     dec!(1.5),
///     "admin_001",
/// );
/// assert_eq!(settings.pay_frequency, PayFrequency::Weekly);
/// assert_eq!(settings.standard_work_week, dec!(40));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Unique identifier for this settings record.
    pub id: Uuid,
    /// The recurring frequency rule for period generation.
    pub pay_frequency: PayFrequency,
    /// Integer anchor (day-of-month or day-of-week depending on frequency)
    /// used to align period boundaries.
    pub first_pay_day: u32,
    /// Hours threshold per week before overtime applies (e.g. 40).
    pub standard_work_week: Decimal,
    /// Pay multiplier for overtime hours (>= 1.0).
    pub overtime_multiplier: Decimal,
    /// Pay multiplier for overtime worked on public holidays (>= 1.0).
    pub holiday_overtime_multiplier: Decimal,
    /// Pay multiplier for overtime worked on weekends (>= 1.0).
    pub weekend_overtime_multiplier: Decimal,
    /// Identity of the administrator who wrote this record.
    pub updated_by: String,
    /// When this record was written.
    pub updated_at: DateTime<Utc>,
}

impl PayrollSettings {
    /// Creates a new settings record stamped with the current time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pay_frequency: PayFrequency,
        first_pay_day: u32,
        standard_work_week: Decimal,
        overtime_multiplier: Decimal,
        holiday_overtime_multiplier: Decimal,
        weekend_overtime_multiplier: Decimal,
        updated_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pay_frequency,
            first_pay_day,
            standard_work_week,
            overtime_multiplier,
            holiday_overtime_multiplier,
            weekend_overtime_multiplier,
            updated_by: updated_by.into(),
            updated_at: Utc::now(),
        }
    }
}
