//! Organization-wide year-to-date hours aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WorkSession;
use crate::ytd::year_bounds;

/// Hours worked by one staff member within the year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffHours {
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Number of finished sessions counted.
    pub sessions: usize,
}

/// Organization-wide hours totals for one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursSummary {
    /// The calendar year summarized.
    pub year: i32,
    /// Total hours across all staff.
    pub total_hours: Decimal,
    /// Per-staff hours, keyed by staff id.
    pub by_staff: HashMap<String, StaffHours>,
    /// Number of currently active staff profiles used as the divisor.
    pub active_staff: usize,
    /// `total_hours / active_staff`, zero when there are no active staff.
    pub average_hours_per_active_staff: Decimal,
}

/// Folds finished work sessions into an organization-wide hours summary
/// for one calendar year, grouped by staff member.
///
/// The average divides by the count of *currently* active staff
/// profiles, not the historical headcount for the target year, so
/// multi-year comparisons are skewed when staffing changed; this
/// matches the surrounding product's reporting semantics.
pub fn year_to_date_hours_summary(
    sessions: &[WorkSession],
    active_staff: usize,
    year: i32,
) -> HoursSummary {
    let (from, to) = year_bounds(year);

    let mut total_hours = Decimal::ZERO;
    let mut by_staff: HashMap<String, StaffHours> = HashMap::new();

    for session in sessions {
        if !session.is_finished() || session.clock_in < from || session.clock_in >= to {
            continue;
        }
        let Some(hours) = session.worked_hours() else {
            continue;
        };

        total_hours += hours;
        let entry = by_staff.entry(session.staff_id.clone()).or_default();
        entry.total_hours += hours;
        entry.sessions += 1;
    }

    let average_hours_per_active_staff = if active_staff == 0 {
        Decimal::ZERO
    } else {
        total_hours / Decimal::from(active_staff as u64)
    };

    HoursSummary {
        year,
        total_hours,
        by_staff,
        active_staff,
        average_hours_per_active_staff,
    }
}
