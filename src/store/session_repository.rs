//! Read-side queries over work session records.
//!
//! Sessions are produced by an external time-tracking source; this
//! repository only appends (to mirror the external feed) and queries.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::models::WorkSession;

/// Repository of work sessions, indexed by staff id and by clock-in date.
#[derive(Debug, Default, Clone)]
pub struct SessionRepository {
    sessions: Arc<RwLock<Vec<WorkSession>>>,
}

impl SessionRepository {
    fn read(&self) -> RwLockReadGuard<'_, Vec<WorkSession>> {
        self.sessions.read().expect("session lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<WorkSession>> {
        self.sessions.write().expect("session lock poisoned")
    }

    /// Appends a session from the external time-tracking feed.
    pub fn record(&self, session: WorkSession) {
        self.write().push(session);
    }

    /// Lists one staff member's sessions whose clock-in falls within
    /// `[start, end]` (inclusive).
    pub fn for_staff_in_range(
        &self,
        staff_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<WorkSession> {
        self.read()
            .iter()
            .filter(|s| s.staff_id == staff_id && s.clock_in >= start && s.clock_in <= end)
            .cloned()
            .collect()
    }

    /// Lists every finished session whose clock-in falls within
    /// `[start, end]` (inclusive), across all staff.
    pub fn finished_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<WorkSession> {
        self.read()
            .iter()
            .filter(|s| s.is_finished() && s.clock_in >= start && s.clock_in <= end)
            .cloned()
            .collect()
    }
}
