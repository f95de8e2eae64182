//! Upsert and query operations over staff payroll profiles.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BankDetails, PaymentMethod, StaffPayrollProfile, StaffStatus, TaxWithholdings,
};

/// A partial update applied to a staff payroll profile.
///
/// When no profile exists for the staff member yet, the update becomes
/// the initial record; `hourly_rate` is then required and the other
/// fields fall back to defaults (`DirectDeposit`, overtime-ineligible,
/// `Active`).
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New hourly rate; must be greater than zero.
    pub hourly_rate: Option<Decimal>,
    /// New overtime eligibility flag.
    pub is_overtime_eligible: Option<bool>,
    /// New payment method.
    pub payment_method: Option<PaymentMethod>,
    /// New bank details.
    pub bank_details: Option<BankDetails>,
    /// New tax withholding election.
    pub tax_withholdings: Option<TaxWithholdings>,
    /// New employment status.
    pub status: Option<StaffStatus>,
}

/// Repository of staff payroll profiles, keyed by staff id.
#[derive(Debug, Default, Clone)]
pub struct ProfileRepository {
    profiles: Arc<RwLock<Vec<StaffPayrollProfile>>>,
}

impl ProfileRepository {
    fn read(&self) -> RwLockReadGuard<'_, Vec<StaffPayrollProfile>> {
        self.profiles.read().expect("profile lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<StaffPayrollProfile>> {
        self.profiles.write().expect("profile lock poisoned")
    }

    /// Patches the profile for `staff_id` if one exists, inserts otherwise.
    pub fn upsert(&self, staff_id: &str, update: ProfileUpdate) -> EngineResult<StaffPayrollProfile> {
        if update.hourly_rate.is_some_and(|rate| rate <= Decimal::ZERO) {
            return Err(EngineError::InvalidProfile {
                field: "hourly_rate".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let mut profiles = self.write();
        if let Some(profile) = profiles.iter_mut().find(|p| p.staff_id == staff_id) {
            if let Some(rate) = update.hourly_rate {
                profile.hourly_rate = rate;
            }
            if let Some(eligible) = update.is_overtime_eligible {
                profile.is_overtime_eligible = eligible;
            }
            if let Some(method) = update.payment_method {
                profile.payment_method = method;
            }
            if let Some(details) = update.bank_details {
                profile.bank_details = Some(details);
            }
            if let Some(withholdings) = update.tax_withholdings {
                profile.tax_withholdings = Some(withholdings);
            }
            if let Some(status) = update.status {
                profile.status = status;
            }
            profile.updated_at = Utc::now();
            return Ok(profile.clone());
        }

        let hourly_rate = update.hourly_rate.ok_or_else(|| EngineError::InvalidProfile {
            field: "hourly_rate".to_string(),
            message: "required when creating a profile".to_string(),
        })?;
        let profile = StaffPayrollProfile {
            staff_id: staff_id.to_string(),
            hourly_rate,
            is_overtime_eligible: update.is_overtime_eligible.unwrap_or(false),
            payment_method: update.payment_method.unwrap_or(PaymentMethod::DirectDeposit),
            bank_details: update.bank_details,
            tax_withholdings: update.tax_withholdings,
            status: update.status.unwrap_or(StaffStatus::Active),
            updated_at: Utc::now(),
        };
        profiles.push(profile.clone());
        Ok(profile)
    }

    /// Fetches the profile for a staff member.
    pub fn get(&self, staff_id: &str) -> EngineResult<StaffPayrollProfile> {
        self.read()
            .iter()
            .find(|p| p.staff_id == staff_id)
            .cloned()
            .ok_or_else(|| EngineError::ProfileNotFound {
                staff_id: staff_id.to_string(),
            })
    }

    /// Lists all profiles with `Active` status.
    pub fn list_active(&self) -> Vec<StaffPayrollProfile> {
        self.read()
            .iter()
            .filter(|p| p.status == StaffStatus::Active)
            .cloned()
            .collect()
    }

    /// Counts profiles with `Active` status.
    pub fn count_active(&self) -> usize {
        self.read()
            .iter()
            .filter(|p| p.status == StaffStatus::Active)
            .count()
    }
}
