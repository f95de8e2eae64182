//! Work session model.
//!
//! Work sessions are raw clock-in/clock-out records produced by an
//! external time-tracking source. They are read-only to this engine and
//! are consumed by range-filtering on `clock_in` within a pay period.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The state of a work session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Clocked in, not yet clocked out; no duration is available.
    Active,
    /// Clocked out normally.
    Completed,
    /// Clocked out and later corrected by an administrator.
    Adjusted,
}

/// A raw clock-in/clock-out record for one staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    /// Unique identifier for the session.
    pub id: Uuid,
    /// The staff member who worked the session.
    pub staff_id: String,
    /// When the staff member clocked in.
    pub clock_in: DateTime<Utc>,
    /// When the staff member clocked out, if they have.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Utc>>,
    /// Worked duration in milliseconds, absent while the session is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
    /// The state of the session.
    pub status: SessionStatus,
}

impl WorkSession {
    /// Creates a completed session of the given duration starting at `clock_in`.
    pub fn completed(
        staff_id: impl Into<String>,
        clock_in: DateTime<Utc>,
        duration_ms: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff_id: staff_id.into(),
            clock_in,
            clock_out: Some(clock_in + chrono::Duration::milliseconds(duration_ms)),
            duration_ms: Some(duration_ms),
            status: SessionStatus::Completed,
        }
    }

    /// Converts the recorded duration into hours, if a duration exists.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use payroll_engine::models::WorkSession;
    /// use rust_decimal_macros::dec;
    ///
    /// let clock_in = Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap();
    /// let session = WorkSession::completed("staff_001", clock_in, 10 * 3_600_000);
    /// assert_eq!(session.worked_hours(), Some(dec!(10)));
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        self.duration_ms
            .map(|ms| Decimal::new(ms, 0) / Decimal::new(3_600_000, 0))
    }

    /// Returns true when the session has finished and carries a duration.
    pub fn is_finished(&self) -> bool {
        self.status != SessionStatus::Active && self.duration_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn clock_in() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_completed_constructor_derives_clock_out() {
        let session = WorkSession::completed("staff_001", clock_in(), 8 * 3_600_000);
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(
            session.clock_out.unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 3, 17, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_worked_hours_fractional() {
        // 90 minutes
        let session = WorkSession::completed("staff_001", clock_in(), 90 * 60_000);
        assert_eq!(session.worked_hours(), Some(dec!(1.5)));
    }

    #[test]
    fn test_active_session_has_no_hours() {
        let session = WorkSession {
            id: Uuid::new_v4(),
            staff_id: "staff_001".to_string(),
            clock_in: clock_in(),
            clock_out: None,
            duration_ms: None,
            status: SessionStatus::Active,
        };
        assert_eq!(session.worked_hours(), None);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_adjusted_session_is_finished() {
        let mut session = WorkSession::completed("staff_001", clock_in(), 8 * 3_600_000);
        session.status = SessionStatus::Adjusted;
        assert!(session.is_finished());
    }

    #[test]
    fn test_session_serialization_skips_missing_clock_out() {
        let session = WorkSession {
            id: Uuid::new_v4(),
            staff_id: "staff_001".to_string(),
            clock_in: clock_in(),
            clock_out: None,
            duration_ms: None,
            status: SessionStatus::Active,
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"status\":\"active\""));
        assert!(!json.contains("clock_out"));
        assert!(!json.contains("duration_ms"));
    }
}
