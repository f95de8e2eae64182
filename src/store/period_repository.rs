//! Create/query/update operations over pay period records.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, PeriodStatus};

/// A closed filter for listing pay periods.
///
/// Replaces the open filter dictionaries of the surrounding product
/// with an explicit struct per operation.
#[derive(Debug, Clone, Default)]
pub struct PeriodFilter {
    /// Only periods with this status.
    pub status: Option<PeriodStatus>,
    /// Only periods starting at or after this instant.
    pub start_date: Option<DateTime<Utc>>,
    /// Only periods ending at or before this instant.
    pub end_date: Option<DateTime<Utc>>,
    /// Maximum number of periods returned.
    pub limit: Option<usize>,
}

/// Repository of pay period records.
///
/// Creation is overlap-safe: the check against every existing period and
/// the insert happen under one write lock, so no two concurrent creations
/// can both pass the overlap check.
#[derive(Debug, Default, Clone)]
pub struct PeriodRepository {
    periods: Arc<RwLock<Vec<PayPeriod>>>,
}

impl PeriodRepository {
    fn read(&self) -> RwLockReadGuard<'_, Vec<PayPeriod>> {
        self.periods.read().expect("period lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<PayPeriod>> {
        self.periods.write().expect("period lock poisoned")
    }

    /// Creates a new pending period after validating the non-overlap
    /// invariant against all existing periods.
    ///
    /// Fails with [`EngineError::OverlappingPeriod`] when the range
    /// intersects any existing period.
    pub fn create(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        notes: Option<String>,
    ) -> EngineResult<PayPeriod> {
        let mut periods = self.write();
        if periods.iter().any(|p| p.overlaps(start_date, end_date)) {
            return Err(EngineError::OverlappingPeriod {
                start: start_date,
                end: end_date,
            });
        }
        let period = PayPeriod::new(start_date, end_date, notes);
        periods.push(period.clone());
        Ok(period)
    }

    /// Checks for an existing period with the identical `(start, end)` pair.
    ///
    /// Used by the generator to make scheduler re-runs idempotent.
    pub fn exists_exact(&self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> bool {
        self.read()
            .iter()
            .any(|p| p.start_date == start_date && p.end_date == end_date)
    }

    /// Fetches a period by id.
    pub fn get(&self, period_id: Uuid) -> EngineResult<PayPeriod> {
        self.read()
            .iter()
            .find(|p| p.id == period_id)
            .cloned()
            .ok_or(EngineError::PeriodNotFound { period_id })
    }

    /// Lists periods matching the filter, descending by start date.
    pub fn list(&self, filter: &PeriodFilter) -> Vec<PayPeriod> {
        let mut matched: Vec<PayPeriod> = self
            .read()
            .iter()
            .filter(|p| filter.status.is_none_or(|s| p.status == s))
            .filter(|p| filter.start_date.is_none_or(|s| p.start_date >= s))
            .filter(|p| filter.end_date.is_none_or(|e| p.end_date <= e))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        if let Some(limit) = filter.limit {
            matched.truncate(limit);
        }
        matched
    }

    /// Patches a period's status, enforcing forward-only transitions.
    ///
    /// Entering `Processed` or `Paid` stamps `processed_at` and
    /// `processed_by` from the caller's identity. Any non-forward
    /// transition fails with [`EngineError::InvalidTransition`].
    pub fn update_status(
        &self,
        period_id: Uuid,
        status: PeriodStatus,
        updated_by: &str,
        notes: Option<String>,
    ) -> EngineResult<PayPeriod> {
        let mut periods = self.write();
        let period = periods
            .iter_mut()
            .find(|p| p.id == period_id)
            .ok_or(EngineError::PeriodNotFound { period_id })?;

        if !period.status.can_transition_to(status) {
            return Err(EngineError::InvalidTransition {
                from: period.status,
                to: status,
            });
        }

        period.status = status;
        if matches!(status, PeriodStatus::Processed | PeriodStatus::Paid) {
            period.processed_at = Some(Utc::now());
            period.processed_by = Some(updated_by.to_string());
        }
        if notes.is_some() {
            period.notes = notes;
        }
        Ok(period.clone())
    }
}
