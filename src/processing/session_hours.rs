//! Work session hour aggregation and overtime split.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{PayrollSettings, WorkSession};

/// Aggregated hours for one staff member over one period's sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHours {
    /// Total worked hours across all counted sessions.
    pub total_hours: Decimal,
    /// Hours paid at the base rate.
    pub base_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
    /// Number of sessions that contributed hours.
    pub sessions_counted: usize,
}

/// Derives the per-session overtime cutover from the configured
/// standard work week, assuming a 5-day week.
///
/// The overtime split is applied per session rather than per period:
/// a single session's hours beyond this cutover are overtime. With the
/// default 40-hour week the cutover is 8 hours per session.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayFrequency, PayrollSettings};
/// use payroll_engine::processing::per_session_overtime_threshold;
/// use rust_decimal_macros::dec;
///
/// let settings = PayrollSettings::new(
///     PayFrequency::Weekly, 1, dec!(40), dec!(1.5), dec!(2.0), dec!(1.5), "admin_001",
/// );
/// assert_eq!(per_session_overtime_threshold(&settings), dec!(8));
/// ```
pub fn per_session_overtime_threshold(settings: &PayrollSettings) -> Decimal {
    settings.standard_work_week / dec!(5)
}

/// Sums raw clock-in/clock-out sessions into total hours and splits
/// them into base and overtime hours.
///
/// A session contributes to overtime only when the staff member is
/// overtime-eligible and that session's own duration exceeds the
/// threshold; the excess accumulates into `overtime_hours` and the
/// capped remainder into `base_hours`. Sessions without a recorded
/// duration (still active) are skipped entirely. Zero sessions in range
/// yield all-zero hours, which still produces a zero-gross payslip
/// downstream.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use payroll_engine::models::WorkSession;
/// use payroll_engine::processing::aggregate_session_hours;
/// use rust_decimal_macros::dec;
///
/// let clock_in = Utc.with_ymd_and_hms(2024, 1, 3, 8, 0, 0).unwrap();
/// let sessions = vec![WorkSession::completed("staff_001", clock_in, 10 * 3_600_000)];
///
/// let hours = aggregate_session_hours(&sessions, true, dec!(8));
/// assert_eq!(hours.base_hours, dec!(8));
/// assert_eq!(hours.overtime_hours, dec!(2));
/// assert_eq!(hours.total_hours, dec!(10));
/// ```
pub fn aggregate_session_hours(
    sessions: &[WorkSession],
    overtime_eligible: bool,
    threshold: Decimal,
) -> SessionHours {
    let mut total_hours = Decimal::ZERO;
    let mut base_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;
    let mut sessions_counted = 0;

    for session in sessions {
        let Some(hours) = session.worked_hours() else {
            continue;
        };
        total_hours += hours;
        sessions_counted += 1;

        if overtime_eligible && hours > threshold {
            overtime_hours += hours - threshold;
            base_hours += threshold;
        } else {
            base_hours += hours;
        }
    }

    SessionHours {
        total_hours,
        base_hours,
        overtime_hours,
        sessions_counted,
    }
}
