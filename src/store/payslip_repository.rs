//! Insert and query operations over payslip records.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::PaySlip;

/// Repository of payslips, indexed by staff id and by period id.
///
/// At most one slip exists per `(staff_id, period_id)` pair; the
/// processor relies on [`PayslipRepository::find_for_staff_period`]
/// before inserting so that retries after a partial failure do not
/// duplicate slips.
#[derive(Debug, Default, Clone)]
pub struct PayslipRepository {
    slips: Arc<RwLock<Vec<PaySlip>>>,
}

impl PayslipRepository {
    fn read(&self) -> RwLockReadGuard<'_, Vec<PaySlip>> {
        self.slips.read().expect("payslip lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<PaySlip>> {
        self.slips.write().expect("payslip lock poisoned")
    }

    /// Inserts a payslip, rejecting a duplicate `(staff_id, period_id)` pair.
    pub fn insert(&self, slip: PaySlip) -> EngineResult<PaySlip> {
        let mut slips = self.write();
        if slips
            .iter()
            .any(|s| s.staff_id == slip.staff_id && s.period_id == slip.period_id)
        {
            return Err(EngineError::DuplicatePayslip {
                staff_id: slip.staff_id.clone(),
                period_id: slip.period_id,
            });
        }
        slips.push(slip.clone());
        Ok(slip)
    }

    /// Fetches a payslip by id.
    pub fn get(&self, payslip_id: Uuid) -> EngineResult<PaySlip> {
        self.read()
            .iter()
            .find(|s| s.id == payslip_id)
            .cloned()
            .ok_or(EngineError::PayslipNotFound { payslip_id })
    }

    /// Finds the slip for a `(staff, period)` pair, if one exists.
    pub fn find_for_staff_period(&self, staff_id: &str, period_id: Uuid) -> Option<PaySlip> {
        self.read()
            .iter()
            .find(|s| s.staff_id == staff_id && s.period_id == period_id)
            .cloned()
    }

    /// Lists all slips for one staff member.
    pub fn for_staff(&self, staff_id: &str) -> Vec<PaySlip> {
        self.read()
            .iter()
            .filter(|s| s.staff_id == staff_id)
            .cloned()
            .collect()
    }

    /// Lists all slips attached to one period.
    pub fn for_period(&self, period_id: Uuid) -> Vec<PaySlip> {
        self.read()
            .iter()
            .filter(|s| s.period_id == period_id)
            .cloned()
            .collect()
    }

    /// Applies a mutation to the slip with the given id.
    ///
    /// Used by the downstream deductions/payment step to patch status,
    /// deductions, and payment dates.
    pub fn update<F>(&self, payslip_id: Uuid, mutate: F) -> EngineResult<PaySlip>
    where
        F: FnOnce(&mut PaySlip),
    {
        let mut slips = self.write();
        let slip = slips
            .iter_mut()
            .find(|s| s.id == payslip_id)
            .ok_or(EngineError::PayslipNotFound { payslip_id })?;
        mutate(slip);
        Ok(slip.clone())
    }
}
