//! Batch payroll processing for one pay period.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    PayPeriod, PaySlip, PaySlipStatus, PayrollSettings, PeriodStatus, StaffPayrollProfile,
};
use crate::processing::{aggregate_session_hours, per_session_overtime_threshold};
use crate::store::{
    PayslipRepository, PeriodRepository, ProfileRepository, SessionRepository, SettingsStore,
};

/// A per-staff failure collected during a processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffFailure {
    /// The staff member whose slip could not be created.
    pub staff_id: String,
    /// What went wrong for this staff member.
    pub message: String,
}

/// The result of one payroll processing run.
///
/// Per-staff failures are isolated rather than aborting the batch, so a
/// run can partially succeed; already-created slips are never rolled
/// back, and a retry skips staff that already have a slip for the
/// period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunReport {
    /// The period that was processed.
    pub period_id: Uuid,
    /// Number of staff members a new payslip was created for.
    pub processed: usize,
    /// Number of staff members skipped because a slip already existed.
    pub skipped: usize,
    /// Staff members whose processing step failed.
    pub failures: Vec<StaffFailure>,
}

/// Processes payroll for one period: one payslip per active staff member.
///
/// Preconditions, validated before any write:
/// - a current settings record exists ([`EngineError::ConfigurationMissing`]);
/// - the period exists ([`EngineError::PeriodNotFound`]);
/// - the period is `Pending` or `InProgress`
///   ([`EngineError::InvalidTransition`]) — an already-processed period
///   cannot be processed again.
///
/// Every active staff member receives exactly one slip, including staff
/// with zero sessions in range (a zero-gross slip, for audit
/// completeness). The hourly rate and overtime multiplier are snapshot
/// into each slip at processing time. After the batch, the period is
/// patched to `Processed` and stamped with the caller's identity.
pub fn process_payroll(
    settings: &SettingsStore,
    periods: &PeriodRepository,
    profiles: &ProfileRepository,
    sessions: &SessionRepository,
    payslips: &PayslipRepository,
    period_id: Uuid,
    processed_by: &str,
    notes: Option<String>,
) -> EngineResult<PayrollRunReport> {
    let current = settings.current().ok_or(EngineError::ConfigurationMissing)?;
    let period = periods.get(period_id)?;

    if !matches!(
        period.status,
        PeriodStatus::Pending | PeriodStatus::InProgress
    ) {
        return Err(EngineError::InvalidTransition {
            from: period.status,
            to: PeriodStatus::Processed,
        });
    }

    let threshold = per_session_overtime_threshold(&current);
    let mut processed = 0;
    let mut skipped = 0;
    let mut failures = Vec::new();

    for profile in profiles.list_active() {
        if payslips
            .find_for_staff_period(&profile.staff_id, period_id)
            .is_some()
        {
            skipped += 1;
            continue;
        }

        let slip = build_payslip(&profile, &current, threshold, sessions, &period);
        match payslips.insert(slip) {
            Ok(slip) => {
                processed += 1;
                info!(
                    staff_id = %profile.staff_id,
                    period_id = %period_id,
                    gross_pay = %slip.gross_pay,
                    "payslip created"
                );
            }
            Err(err) => {
                warn!(
                    staff_id = %profile.staff_id,
                    period_id = %period_id,
                    error = %err,
                    "payslip creation failed"
                );
                failures.push(StaffFailure {
                    staff_id: profile.staff_id.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    // Period status is patched only after every staff member is handled.
    periods.update_status(period_id, PeriodStatus::Processed, processed_by, notes)?;

    info!(
        period_id = %period_id,
        processed,
        skipped,
        failed = failures.len(),
        "payroll run finished"
    );
    Ok(PayrollRunReport {
        period_id,
        processed,
        skipped,
        failures,
    })
}

fn build_payslip(
    profile: &StaffPayrollProfile,
    settings: &PayrollSettings,
    threshold: Decimal,
    sessions: &SessionRepository,
    period: &PayPeriod,
) -> PaySlip {
    let in_range =
        sessions.for_staff_in_range(&profile.staff_id, period.start_date, period.end_date);
    let hours = aggregate_session_hours(&in_range, profile.is_overtime_eligible, threshold);

    let base_pay = (hours.total_hours - hours.overtime_hours) * profile.hourly_rate;
    let overtime_pay = hours.overtime_hours * profile.hourly_rate * settings.overtime_multiplier;
    let gross_pay = base_pay + overtime_pay;

    PaySlip {
        id: Uuid::new_v4(),
        staff_id: profile.staff_id.clone(),
        period_id: period.id,
        base_hours: hours.base_hours,
        overtime_hours: hours.overtime_hours,
        hourly_rate: profile.hourly_rate,
        gross_pay,
        deductions: Vec::new(),
        bonuses: Vec::new(),
        net_pay: gross_pay,
        status: PaySlipStatus::Processing,
        payment_date: None,
        payment_method: profile.payment_method,
        notes: None,
        created_at: Utc::now(),
    }
}
