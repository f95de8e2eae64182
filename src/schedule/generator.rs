//! Sequential pay period generation up to a horizon.

use chrono::{DateTime, Duration, Months, Utc};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriod;
use crate::schedule::period_bounds;
use crate::store::{PeriodRepository, SettingsStore};

/// The result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Periods created by this run, in chronological order.
    pub created: Vec<PayPeriod>,
    /// Periods skipped because an identical `(start, end)` pair already existed.
    pub skipped: usize,
}

/// Generates successive non-overlapping periods from `start` until the
/// horizon `start + months_ahead` is exceeded.
///
/// Each period's start is derived from the previous period's end plus
/// one millisecond, so the loop is inherently sequential. A period whose
/// exact `(start, end)` pair is already persisted is skipped, making
/// scheduler re-runs idempotent.
///
/// Fails with [`EngineError::ConfigurationMissing`] before any write
/// when no settings record exists.
pub fn generate_periods(
    settings: &SettingsStore,
    periods: &PeriodRepository,
    start: DateTime<Utc>,
    months_ahead: u32,
) -> EngineResult<GenerationOutcome> {
    let current = settings.current().ok_or(EngineError::ConfigurationMissing)?;
    let horizon = start + Months::new(months_ahead);

    let mut created = Vec::new();
    let mut skipped = 0;
    let mut cursor = start;

    while cursor < horizon {
        let (period_start, period_end) = period_bounds(current.pay_frequency, cursor);
        if periods.exists_exact(period_start, period_end) {
            skipped += 1;
        } else {
            created.push(periods.create(period_start, period_end, None)?);
        }
        cursor = period_end + Duration::milliseconds(1);
    }

    info!(
        frequency = ?current.pay_frequency,
        created = created.len(),
        skipped,
        "pay period generation finished"
    );
    Ok(GenerationOutcome { created, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayFrequency, PayrollSettings};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn store_with(frequency: PayFrequency) -> SettingsStore {
        let store = SettingsStore::default();
        store.append(PayrollSettings::new(
            frequency,
            1,
            dec!(40),
            dec!(1.5),
            dec!(2.0),
            dec!(1.5),
            "admin_001",
        ));
        store
    }

    fn start_of(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_generation_without_settings_fails_with_no_writes() {
        let settings = SettingsStore::default();
        let periods = PeriodRepository::default();

        let result = generate_periods(&settings, &periods, start_of(2024, 1, 1), 3);
        assert!(matches!(result, Err(EngineError::ConfigurationMissing)));
        assert!(periods.list(&Default::default()).is_empty());
    }

    #[test]
    fn test_weekly_periods_are_contiguous() {
        let settings = store_with(PayFrequency::Weekly);
        let periods = PeriodRepository::default();

        let outcome = generate_periods(&settings, &periods, start_of(2024, 1, 1), 2).unwrap();
        assert!(outcome.created.len() >= 8);
        for pair in outcome.created.windows(2) {
            assert_eq!(
                pair[1].start_date,
                pair[0].end_date + Duration::milliseconds(1)
            );
        }
    }

    #[test]
    fn test_first_weekly_period_boundaries() {
        let settings = store_with(PayFrequency::Weekly);
        let periods = PeriodRepository::default();

        let outcome = generate_periods(&settings, &periods, start_of(2024, 1, 1), 1).unwrap();
        let first = &outcome.created[0];
        assert_eq!(first.start_date, start_of(2024, 1, 1));
        assert_eq!(
            first.end_date,
            Utc.with_ymd_and_hms(2024, 1, 7, 23, 59, 59).unwrap()
                + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_semimonthly_split_sequence() {
        let settings = store_with(PayFrequency::Semimonthly);
        let periods = PeriodRepository::default();

        let outcome = generate_periods(&settings, &periods, start_of(2024, 3, 1), 1).unwrap();
        assert_eq!(
            outcome.created[0].end_date.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(outcome.created[1].start_date, start_of(2024, 3, 16));
        assert_eq!(
            outcome.created[1].end_date.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let settings = store_with(PayFrequency::Biweekly);
        let periods = PeriodRepository::default();

        let first = generate_periods(&settings, &periods, start_of(2024, 1, 1), 3).unwrap();
        let second = generate_periods(&settings, &periods, start_of(2024, 1, 1), 3).unwrap();

        assert!(second.created.is_empty());
        assert_eq!(second.skipped, first.created.len());
        assert_eq!(periods.list(&Default::default()).len(), first.created.len());
    }

    #[test]
    fn test_monthly_generation_stops_at_horizon() {
        let settings = store_with(PayFrequency::Monthly);
        let periods = PeriodRepository::default();

        let outcome = generate_periods(&settings, &periods, start_of(2024, 1, 1), 3).unwrap();
        assert_eq!(outcome.created.len(), 3);
        assert_eq!(
            outcome.created[2].end_date.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
    }
}
