//! Per-frequency pay period boundary calculation.
//!
//! Given a frequency and a start instant, computes the inclusive
//! `[start, end]` pair for exactly one period, with the end normalized
//! to the last millisecond of its calendar day.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};

use crate::models::PayFrequency;

/// Returns the last millisecond of the given calendar day as a UTC instant.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is valid on every day")
        .and_utc()
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).expect("day 1 exists in every month");
    first + Months::new(1) - Days::new(1)
}

/// Computes the `[start, end]` pair for one period in the given frequency.
///
/// Boundary rules:
/// - `Weekly`: end is 6 days after the start day (7-day inclusive window).
/// - `Biweekly`: end is 13 days after the start day (14-day inclusive window).
/// - `Semimonthly`: a period starting on the 1st ends on the 15th; any
///   other start ends on the last day of the same month, yielding the
///   uneven 1–15 / 16–end split.
/// - `Monthly`: end is the last day of the start's calendar month.
///
/// The end is always the last millisecond (23:59:59.999) of its day.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use payroll_engine::models::PayFrequency;
/// use payroll_engine::schedule::period_bounds;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let (_, end) = period_bounds(PayFrequency::Weekly, start);
/// assert_eq!(end.to_rfc3339(), "2024-01-07T23:59:59.999+00:00");
/// ```
pub fn period_bounds(
    frequency: PayFrequency,
    start: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_day = start.date_naive();
    let end_day = match frequency {
        PayFrequency::Weekly => start_day + Days::new(6),
        PayFrequency::Biweekly => start_day + Days::new(13),
        PayFrequency::Semimonthly => {
            if start_day.day() == 1 {
                start_day + Days::new(14)
            } else {
                last_day_of_month(start_day)
            }
        }
        PayFrequency::Monthly => last_day_of_month(start_day),
    };
    (start, end_of_day(end_day))
}
