//! Year-to-date aggregation.
//!
//! Pure folds over historical payslips (per staff member) and work
//! sessions (organization-wide), producing cumulative totals and
//! per-category deduction breakdowns for a calendar year.

mod hours_summary;
mod staff_summary;

pub use hours_summary::{HoursSummary, StaffHours, year_to_date_hours_summary};
pub use staff_summary::{
    BENEFIT_KEYWORDS, DeductionBucket, DeductionClass, YearToDateSummary, classify_deduction,
    year_bounds, year_to_date_summary,
};
