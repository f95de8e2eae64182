//! Per-staff year-to-date payslip aggregation.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PaySlip, PaySlipStatus};

/// Deduction type substrings classified as benefits.
pub const BENEFIT_KEYWORDS: [&str; 8] = [
    "401k",
    "retirement",
    "health",
    "dental",
    "vision",
    "hsa",
    "fsa",
    "insurance",
];

/// The category a deduction type label falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionClass {
    /// The label contains "tax" (case-insensitive).
    Tax,
    /// The label matches the benefit vocabulary.
    Benefit,
    /// Everything else.
    Other,
}

/// Classifies an opaque deduction type label.
///
/// # Example
///
/// ```
/// use payroll_engine::ytd::{DeductionClass, classify_deduction};
///
/// assert_eq!(classify_deduction("federal_tax"), DeductionClass::Tax);
/// assert_eq!(classify_deduction("401k"), DeductionClass::Benefit);
/// assert_eq!(classify_deduction("union_dues"), DeductionClass::Other);
/// ```
pub fn classify_deduction(kind: &str) -> DeductionClass {
    let lowered = kind.to_lowercase();
    if lowered.contains("tax") {
        DeductionClass::Tax
    } else if BENEFIT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        DeductionClass::Benefit
    } else {
        DeductionClass::Other
    }
}

/// Accumulated amount and entry count for one deduction type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBucket {
    /// Total amount withheld under this type.
    pub amount: Decimal,
    /// Number of deduction entries under this type.
    pub count: usize,
}

/// Cumulative totals for one staff member over one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearToDateSummary {
    /// The staff member summarized.
    pub staff_id: String,
    /// The calendar year summarized.
    pub year: i32,
    /// Sum of gross pay across paid slips.
    pub gross_earnings: Decimal,
    /// Sum of net pay across paid slips.
    pub net_earnings: Decimal,
    /// Sum of base plus overtime hours across paid slips.
    pub total_hours: Decimal,
    /// Deductions whose type contains "tax".
    pub taxes_withheld: Decimal,
    /// Deductions matching the benefit vocabulary.
    pub benefits: Decimal,
    /// All remaining deductions.
    pub other_deductions: Decimal,
    /// Number of paid slips counted.
    pub pay_periods: usize,
    /// `total_hours / pay_periods`, zero when no periods counted.
    pub average_hours_per_period: Decimal,
    /// `gross_earnings / pay_periods`, zero when no periods counted.
    pub average_gross_pay: Decimal,
    /// `net_earnings / pay_periods`, zero when no periods counted.
    pub average_net_pay: Decimal,
    /// Per-type accumulation of every deduction entry.
    pub breakdown_by_type: HashMap<String, DeductionBucket>,
}

/// Returns the `[Jan 1 year, Jan 1 year+1)` bounds as UTC instants.
pub fn year_bounds(year: i32) -> (DateTime<Utc>, DateTime<Utc>) {
    let from = NaiveDate::from_ymd_opt(year, 1, 1)
        .expect("January 1st exists in every year")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc();
    let to = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .expect("January 1st exists in every year")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc();
    (from, to)
}

/// Folds a staff member's payslips into a year-to-date summary.
///
/// Only slips with `Paid` status and a payment date inside the calendar
/// year are counted. The fold is order-independent: any permutation of
/// the input slips produces the same summary.
pub fn year_to_date_summary(slips: &[PaySlip], staff_id: &str, year: i32) -> YearToDateSummary {
    let (from, to) = year_bounds(year);

    let mut gross_earnings = Decimal::ZERO;
    let mut net_earnings = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;
    let mut taxes_withheld = Decimal::ZERO;
    let mut benefits = Decimal::ZERO;
    let mut other_deductions = Decimal::ZERO;
    let mut pay_periods = 0;
    let mut breakdown_by_type: HashMap<String, DeductionBucket> = HashMap::new();

    for slip in slips {
        if slip.staff_id != staff_id || slip.status != PaySlipStatus::Paid {
            continue;
        }
        let Some(payment_date) = slip.payment_date else {
            continue;
        };
        if payment_date < from || payment_date >= to {
            continue;
        }

        gross_earnings += slip.gross_pay;
        net_earnings += slip.net_pay;
        total_hours += slip.base_hours + slip.overtime_hours;
        pay_periods += 1;

        for deduction in &slip.deductions {
            let bucket = breakdown_by_type.entry(deduction.kind.clone()).or_default();
            bucket.amount += deduction.amount;
            bucket.count += 1;

            match classify_deduction(&deduction.kind) {
                DeductionClass::Tax => taxes_withheld += deduction.amount,
                DeductionClass::Benefit => benefits += deduction.amount,
                DeductionClass::Other => other_deductions += deduction.amount,
            }
        }
    }

    let divisor = Decimal::from(pay_periods as u64);
    let (average_hours_per_period, average_gross_pay, average_net_pay) = if pay_periods == 0 {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            total_hours / divisor,
            gross_earnings / divisor,
            net_earnings / divisor,
        )
    };

    YearToDateSummary {
        staff_id: staff_id.to_string(),
        year,
        gross_earnings,
        net_earnings,
        total_hours,
        taxes_withheld,
        benefits,
        other_deductions,
        pay_periods,
        average_hours_per_period,
        average_gross_pay,
        average_net_pay,
        breakdown_by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Deduction, PaymentMethod};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn paid_slip(
        staff_id: &str,
        paid_on: DateTime<Utc>,
        gross: Decimal,
        net: Decimal,
        hours: Decimal,
        deductions: Vec<Deduction>,
    ) -> PaySlip {
        PaySlip {
            id: Uuid::new_v4(),
            staff_id: staff_id.to_string(),
            period_id: Uuid::new_v4(),
            base_hours: hours,
            overtime_hours: Decimal::ZERO,
            hourly_rate: dec!(20),
            gross_pay: gross,
            deductions,
            bonuses: vec![],
            net_pay: net,
            status: PaySlipStatus::Paid,
            payment_date: Some(paid_on),
            payment_method: PaymentMethod::DirectDeposit,
            notes: None,
            created_at: paid_on,
        }
    }

    fn deduction(kind: &str, amount: Decimal) -> Deduction {
        Deduction {
            kind: kind.to_string(),
            amount,
            description: None,
        }
    }

    fn in_2024(m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_classify_tax_case_insensitive() {
        assert_eq!(classify_deduction("Federal_Tax"), DeductionClass::Tax);
        assert_eq!(classify_deduction("state_tax"), DeductionClass::Tax);
    }

    #[test]
    fn test_classify_benefit_vocabulary() {
        for kind in ["401k", "retirement_plan", "health_plan", "dental", "vision",
            "hsa_contribution", "fsa", "life_insurance"]
        {
            assert_eq!(classify_deduction(kind), DeductionClass::Benefit, "{kind}");
        }
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify_deduction("union_dues"), DeductionClass::Other);
        assert_eq!(classify_deduction("garnishment"), DeductionClass::Other);
    }

    #[test]
    fn test_empty_input_yields_zeroed_summary() {
        let summary = year_to_date_summary(&[], "staff_001", 2024);
        assert_eq!(summary.pay_periods, 0);
        assert_eq!(summary.gross_earnings, Decimal::ZERO);
        assert_eq!(summary.average_gross_pay, Decimal::ZERO);
        assert_eq!(summary.average_hours_per_period, Decimal::ZERO);
        assert!(summary.breakdown_by_type.is_empty());
    }

    #[test]
    fn test_mixed_deduction_types_classified() {
        let slips = vec![
            paid_slip(
                "staff_001",
                in_2024(2, 15),
                dec!(1000),
                dec!(950),
                dec!(80),
                vec![deduction("federal_tax", dec!(50))],
            ),
            paid_slip(
                "staff_001",
                in_2024(3, 1),
                dec!(1000),
                dec!(970),
                dec!(80),
                vec![deduction("401k", dec!(30))],
            ),
        ];

        let summary = year_to_date_summary(&slips, "staff_001", 2024);
        assert_eq!(summary.taxes_withheld, dec!(50));
        assert_eq!(summary.benefits, dec!(30));
        assert_eq!(summary.other_deductions, Decimal::ZERO);
        assert_eq!(summary.breakdown_by_type["federal_tax"].amount, dec!(50));
        assert_eq!(summary.breakdown_by_type["federal_tax"].count, 1);
        assert_eq!(summary.breakdown_by_type["401k"].count, 1);
    }

    #[test]
    fn test_unpaid_and_cancelled_slips_excluded() {
        let mut draft = paid_slip(
            "staff_001",
            in_2024(2, 1),
            dec!(500),
            dec!(500),
            dec!(40),
            vec![],
        );
        draft.status = PaySlipStatus::Processing;
        let mut cancelled = paid_slip(
            "staff_001",
            in_2024(3, 1),
            dec!(500),
            dec!(500),
            dec!(40),
            vec![],
        );
        cancelled.status = PaySlipStatus::Cancelled;

        let summary = year_to_date_summary(&[draft, cancelled], "staff_001", 2024);
        assert_eq!(summary.pay_periods, 0);
    }

    #[test]
    fn test_payment_dates_outside_year_excluded() {
        let slips = vec![
            paid_slip(
                "staff_001",
                Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap(),
                dec!(100),
                dec!(100),
                dec!(8),
                vec![],
            ),
            paid_slip(
                "staff_001",
                Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                dec!(100),
                dec!(100),
                dec!(8),
                vec![],
            ),
            paid_slip("staff_001", in_2024(6, 15), dec!(100), dec!(100), dec!(8), vec![]),
        ];

        let summary = year_to_date_summary(&slips, "staff_001", 2024);
        assert_eq!(summary.pay_periods, 1);
        assert_eq!(summary.gross_earnings, dec!(100));
    }

    #[test]
    fn test_other_staff_slips_excluded() {
        let slips = vec![paid_slip(
            "staff_002",
            in_2024(2, 1),
            dec!(100),
            dec!(100),
            dec!(8),
            vec![],
        )];
        let summary = year_to_date_summary(&slips, "staff_001", 2024);
        assert_eq!(summary.pay_periods, 0);
    }

    #[test]
    fn test_averages_divide_by_period_count() {
        let slips = vec![
            paid_slip("staff_001", in_2024(1, 15), dec!(800), dec!(700), dec!(80), vec![]),
            paid_slip("staff_001", in_2024(1, 31), dec!(1000), dec!(900), dec!(90), vec![]),
        ];

        let summary = year_to_date_summary(&slips, "staff_001", 2024);
        assert_eq!(summary.pay_periods, 2);
        assert_eq!(summary.average_gross_pay, dec!(900));
        assert_eq!(summary.average_net_pay, dec!(800));
        assert_eq!(summary.average_hours_per_period, dec!(85));
    }

    #[test]
    fn test_fold_is_order_independent() {
        let mut slips = vec![
            paid_slip(
                "staff_001",
                in_2024(1, 15),
                dec!(800),
                dec!(700),
                dec!(80),
                vec![deduction("federal_tax", dec!(60))],
            ),
            paid_slip(
                "staff_001",
                in_2024(4, 15),
                dec!(900),
                dec!(850),
                dec!(82),
                vec![deduction("dental", dec!(12))],
            ),
            paid_slip(
                "staff_001",
                in_2024(7, 15),
                dec!(950),
                dec!(880),
                dec!(85),
                vec![deduction("union_dues", dec!(20))],
            ),
        ];

        let forward = year_to_date_summary(&slips, "staff_001", 2024);
        slips.reverse();
        let backward = year_to_date_summary(&slips, "staff_001", 2024);

        assert_eq!(forward.net_earnings, backward.net_earnings);
        assert_eq!(forward.taxes_withheld, backward.taxes_withheld);
        assert_eq!(forward.benefits, backward.benefits);
        assert_eq!(forward.other_deductions, backward.other_deductions);
        assert_eq!(forward.breakdown_by_type, backward.breakdown_by_type);
    }

    #[test]
    fn test_year_bounds_half_open() {
        let (from, to) = year_bounds(2024);
        assert_eq!(from, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(to, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }
}
