//! Typed request/response facade over the payroll engine.
//!
//! All operations are synchronous function calls with structured
//! input/output; no wire protocol is defined here. The facade owns the
//! repositories, applies self-vs-admin access checks, and stamps caller
//! identities onto mutating operations.

mod access;

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BankSummary, PayFrequency, PayPeriod, PaySlip, PaySlipStatus, PaymentMethod, PayrollSettings,
    PeriodStatus, StaffStatus, TaxWithholdings,
};
use crate::processing::{PayrollRunReport, process_payroll};
use crate::schedule::{GenerationOutcome, generate_periods};
use crate::store::{
    PayslipRepository, PeriodFilter, PeriodRepository, ProfileRepository, ProfileUpdate,
    SessionRepository, SettingsStore,
};
use crate::ytd::{HoursSummary, YearToDateSummary, year_to_date_hours_summary, year_to_date_summary};

pub use access::{CallerIdentity, Role, ensure_admin, ensure_can_view};

/// Input for appending a new payroll settings record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// The recurring frequency rule for period generation.
    pub pay_frequency: PayFrequency,
    /// Integer anchor used to align period boundaries.
    pub first_pay_day: u32,
    /// Hours threshold per week before overtime applies.
    pub standard_work_week: Decimal,
    /// Pay multiplier for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Pay multiplier for overtime worked on public holidays.
    pub holiday_overtime_multiplier: Decimal,
    /// Pay multiplier for overtime worked on weekends.
    pub weekend_overtime_multiplier: Decimal,
}

/// A pay period enriched with a computed payslip summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodWithSummary {
    /// The period itself.
    pub period: PayPeriod,
    /// Number of payslips attached to the period.
    pub total_staff: usize,
    /// Sum of net pay across the period's payslips.
    pub total_pay: Decimal,
    /// Count of payslips per status.
    pub status_counts: HashMap<PaySlipStatus, usize>,
}

/// A staff payroll profile as returned by reads: raw bank numbers are
/// replaced with a masked summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffProfileView {
    /// The staff member this profile belongs to.
    pub staff_id: String,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
    /// Whether hours above the threshold are paid at the overtime multiplier.
    pub is_overtime_eligible: bool,
    /// How the staff member is paid.
    pub payment_method: PaymentMethod,
    /// Masked bank details, if any were provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankSummary>,
    /// Tax withholding election, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_withholdings: Option<TaxWithholdings>,
    /// Employment status.
    pub status: StaffStatus,
}

/// The payroll engine's synchronous invocation surface.
///
/// Clones share the underlying collections, mirroring handles onto one
/// document store.
#[derive(Debug, Default, Clone)]
pub struct PayrollService {
    settings: SettingsStore,
    periods: PeriodRepository,
    profiles: ProfileRepository,
    sessions: SessionRepository,
    payslips: PayslipRepository,
}

impl PayrollService {
    /// Creates a service over empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// The work session collection, fed by the external time-tracking source.
    pub fn sessions(&self) -> &SessionRepository {
        &self.sessions
    }

    /// The payslip collection.
    pub fn payslips(&self) -> &PayslipRepository {
        &self.payslips
    }

    // --- settings ---

    /// Appends a new settings record, making it current. Admin only.
    pub fn update_payroll_settings(
        &self,
        update: SettingsUpdate,
        caller: &CallerIdentity,
    ) -> EngineResult<PayrollSettings> {
        ensure_admin(caller)?;
        validate_settings(&update)?;
        let settings = PayrollSettings::new(
            update.pay_frequency,
            update.first_pay_day,
            update.standard_work_week,
            update.overtime_multiplier,
            update.holiday_overtime_multiplier,
            update.weekend_overtime_multiplier,
            caller.subject.clone(),
        );
        self.settings.append(settings.clone());
        Ok(settings)
    }

    /// Returns the current settings record.
    pub fn current_settings(&self) -> EngineResult<PayrollSettings> {
        self.settings.current().ok_or(EngineError::ConfigurationMissing)
    }

    // --- periods ---

    /// Generates periods from `start` until `months_ahead` past it. Admin only.
    pub fn generate_pay_periods(
        &self,
        start: DateTime<Utc>,
        months_ahead: u32,
        caller: &CallerIdentity,
    ) -> EngineResult<GenerationOutcome> {
        ensure_admin(caller)?;
        generate_periods(&self.settings, &self.periods, start, months_ahead)
    }

    /// Manually creates one pending period. Admin only.
    pub fn create_pay_period(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        notes: Option<String>,
        caller: &CallerIdentity,
    ) -> EngineResult<PayPeriod> {
        ensure_admin(caller)?;
        self.periods.create(start_date, end_date, notes)
    }

    /// Lists periods matching the filter, descending by start date.
    pub fn list_pay_periods(&self, filter: &PeriodFilter) -> Vec<PayPeriod> {
        self.periods.list(filter)
    }

    /// Fetches one period enriched with its payslip summary.
    pub fn get_pay_period(&self, period_id: Uuid) -> EngineResult<PeriodWithSummary> {
        let period = self.periods.get(period_id)?;
        let slips = self.payslips.for_period(period_id);

        let total_pay = slips.iter().map(|s| s.net_pay).sum();
        let mut status_counts: HashMap<PaySlipStatus, usize> = HashMap::new();
        for slip in &slips {
            *status_counts.entry(slip.status).or_insert(0) += 1;
        }

        Ok(PeriodWithSummary {
            period,
            total_staff: slips.len(),
            total_pay,
            status_counts,
        })
    }

    /// Patches a period's status, forward-only. Admin only.
    pub fn update_period_status(
        &self,
        period_id: Uuid,
        status: PeriodStatus,
        notes: Option<String>,
        caller: &CallerIdentity,
    ) -> EngineResult<PayPeriod> {
        ensure_admin(caller)?;
        self.periods
            .update_status(period_id, status, &caller.subject, notes)
    }

    // --- profiles ---

    /// Patches or creates the payroll profile for a staff member. Admin only.
    pub fn upsert_staff_profile(
        &self,
        staff_id: &str,
        update: ProfileUpdate,
        caller: &CallerIdentity,
    ) -> EngineResult<StaffProfileView> {
        ensure_admin(caller)?;
        let profile = self.profiles.upsert(staff_id, update)?;
        Ok(profile_view(profile))
    }

    /// Fetches a staff member's payroll profile with masked bank details.
    pub fn get_staff_profile(
        &self,
        staff_id: &str,
        caller: &CallerIdentity,
    ) -> EngineResult<StaffProfileView> {
        ensure_can_view(caller, staff_id)?;
        Ok(profile_view(self.profiles.get(staff_id)?))
    }

    // --- processing ---

    /// Processes payroll for one period. Admin only.
    pub fn process_payroll(
        &self,
        period_id: Uuid,
        notes: Option<String>,
        caller: &CallerIdentity,
    ) -> EngineResult<PayrollRunReport> {
        ensure_admin(caller)?;
        process_payroll(
            &self.settings,
            &self.periods,
            &self.profiles,
            &self.sessions,
            &self.payslips,
            period_id,
            &caller.subject,
            notes,
        )
    }

    // --- payslips ---

    /// Lists one staff member's payslips.
    pub fn list_payslips_for_staff(
        &self,
        staff_id: &str,
        caller: &CallerIdentity,
    ) -> EngineResult<Vec<PaySlip>> {
        ensure_can_view(caller, staff_id)?;
        Ok(self.payslips.for_staff(staff_id))
    }

    /// Fetches one payslip by id.
    pub fn get_payslip(&self, payslip_id: Uuid, caller: &CallerIdentity) -> EngineResult<PaySlip> {
        let slip = self.payslips.get(payslip_id)?;
        ensure_can_view(caller, &slip.staff_id)?;
        Ok(slip)
    }

    /// Lists all payslips attached to one period. Admin only.
    pub fn payslips_for_period(
        &self,
        period_id: Uuid,
        caller: &CallerIdentity,
    ) -> EngineResult<Vec<PaySlip>> {
        ensure_admin(caller)?;
        Ok(self.payslips.for_period(period_id))
    }

    // --- year-to-date ---

    /// Returns a staff member's year-to-date summary; the year defaults
    /// to the current calendar year.
    pub fn year_to_date_summary(
        &self,
        staff_id: &str,
        year: Option<i32>,
        caller: &CallerIdentity,
    ) -> EngineResult<YearToDateSummary> {
        ensure_can_view(caller, staff_id)?;
        let year = year.unwrap_or_else(|| Utc::now().year());
        let slips = self.payslips.for_staff(staff_id);
        Ok(year_to_date_summary(&slips, staff_id, year))
    }

    /// Returns the organization-wide hours summary for a year. Admin only.
    pub fn year_to_date_hours_summary(
        &self,
        year: Option<i32>,
        caller: &CallerIdentity,
    ) -> EngineResult<HoursSummary> {
        ensure_admin(caller)?;
        let year = year.unwrap_or_else(|| Utc::now().year());
        let (from, to) = crate::ytd::year_bounds(year);
        let sessions = self
            .sessions
            .finished_in_range(from, to - chrono::Duration::milliseconds(1));
        Ok(year_to_date_hours_summary(
            &sessions,
            self.profiles.count_active(),
            year,
        ))
    }
}

fn validate_settings(update: &SettingsUpdate) -> EngineResult<()> {
    if update.standard_work_week <= Decimal::ZERO {
        return Err(EngineError::InvalidSettings {
            field: "standard_work_week".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    for (field, value) in [
        ("overtime_multiplier", update.overtime_multiplier),
        (
            "holiday_overtime_multiplier",
            update.holiday_overtime_multiplier,
        ),
        (
            "weekend_overtime_multiplier",
            update.weekend_overtime_multiplier,
        ),
    ] {
        if value < dec!(1.0) {
            return Err(EngineError::InvalidSettings {
                field: field.to_string(),
                message: "must be at least 1.0".to_string(),
            });
        }
    }
    Ok(())
}

fn profile_view(profile: crate::models::StaffPayrollProfile) -> StaffProfileView {
    StaffProfileView {
        staff_id: profile.staff_id,
        hourly_rate: profile.hourly_rate,
        is_overtime_eligible: profile.is_overtime_eligible,
        payment_method: profile.payment_method,
        bank_details: profile.bank_details.as_ref().map(|d| d.summary()),
        tax_withholdings: profile.tax_withholdings,
        status: profile.status,
    }
}
