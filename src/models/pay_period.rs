//! Pay period model and status machine.
//!
//! This module contains the [`PayPeriod`] type and its [`PeriodStatus`]
//! state machine, including the overlap predicates that enforce the
//! non-overlap invariant at creation time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lifecycle status of a pay period.
///
/// Transitions are forward-only: `Pending → InProgress → Processed → Paid`,
/// with a manual `Pending → Processed` skip allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Generated or manually created, not yet processed.
    Pending,
    /// Processing has been started for this period.
    InProgress,
    /// Payslips exist for every active staff member.
    Processed,
    /// All payslips for this period have been paid out.
    Paid,
}

impl PeriodStatus {
    /// Returns the wire form of the status (e.g. `"in_progress"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodStatus::Pending => "pending",
            PeriodStatus::InProgress => "in_progress",
            PeriodStatus::Processed => "processed",
            PeriodStatus::Paid => "paid",
        }
    }

    /// Checks whether a status patch from `self` to `next` is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PeriodStatus;
    ///
    /// assert!(PeriodStatus::Pending.can_transition_to(PeriodStatus::InProgress));
    /// assert!(PeriodStatus::Pending.can_transition_to(PeriodStatus::Processed));
    /// assert!(PeriodStatus::Processed.can_transition_to(PeriodStatus::Paid));
    /// assert!(!PeriodStatus::Paid.can_transition_to(PeriodStatus::Pending));
    /// assert!(!PeriodStatus::Pending.can_transition_to(PeriodStatus::Paid));
    /// ```
    pub fn can_transition_to(&self, next: PeriodStatus) -> bool {
        matches!(
            (self, next),
            (PeriodStatus::Pending, PeriodStatus::InProgress)
                | (PeriodStatus::Pending, PeriodStatus::Processed)
                | (PeriodStatus::InProgress, PeriodStatus::Processed)
                | (PeriodStatus::Processed, PeriodStatus::Paid)
        )
    }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous, non-overlapping date range over which hours are
/// aggregated and one payslip per staff member is produced.
///
/// `end_date` is inclusive through 23:59:59.999 of its calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Unique identifier for the period.
    pub id: Uuid,
    /// Start of the period (inclusive).
    pub start_date: DateTime<Utc>,
    /// End of the period (inclusive, last millisecond of its day).
    pub end_date: DateTime<Utc>,
    /// The lifecycle status of the period.
    pub status: PeriodStatus,
    /// When the period was processed, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    /// Identity of the caller who processed the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_by: Option<String>,
    /// Free-form notes attached to the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the period record was created.
    pub created_at: DateTime<Utc>,
}

impl PayPeriod {
    /// Creates a new pending period over the given range.
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            end_date,
            status: PeriodStatus::Pending,
            processed_at: None,
            processed_by: None,
            notes,
            created_at: Utc::now(),
        }
    }

    /// Checks if a timestamp falls within this period (inclusive).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_date && instant <= self.end_date
    }

    /// Checks whether the range `[start, end]` intersects this period.
    ///
    /// Three predicates are evaluated: the new start falls inside this
    /// period, the new end falls inside this period, or the new range
    /// fully contains this period. Checked against every existing period,
    /// these cover the symmetric containment case as well.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use payroll_engine::models::PayPeriod;
    ///
    /// let period = PayPeriod::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 14, 23, 59, 59).unwrap(),
    ///     None,
    /// );
    ///
    /// let overlapping_start = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    /// let overlapping_end = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
    /// assert!(period.overlaps(overlapping_start, overlapping_end));
    ///
    /// let clear_start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    /// let clear_end = Utc.with_ymd_and_hms(2024, 1, 28, 0, 0, 0).unwrap();
    /// assert!(!period.overlaps(clear_start, clear_end));
    /// ```
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        let start_inside = start >= self.start_date && start <= self.end_date;
        let end_inside = end >= self.start_date && end <= self.end_date;
        let contains_existing = start <= self.start_date && end >= self.end_date;
        start_inside || end_inside || contains_existing
    }
}
