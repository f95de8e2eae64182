//! Payslip model and related types.
//!
//! A payslip is the computed pay record for one staff member for one
//! pay period. The hourly rate and multipliers are snapshot at
//! processing time and never re-derived from live settings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::staff_profile::PaymentMethod;

/// The lifecycle status of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaySlipStatus {
    /// Created but not yet part of a processing run.
    Draft,
    /// Created by a processing run; deductions not yet applied.
    Processing,
    /// Paid out; counted by year-to-date aggregation.
    Paid,
    /// Voided; excluded from aggregation.
    Cancelled,
}

/// A typed deduction entry on a payslip.
///
/// Deduction types are opaque labeled amounts; year-to-date aggregation
/// classifies them by substring (see [`crate::ytd`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deduction {
    /// The deduction type label (e.g. "federal_tax", "401k").
    #[serde(rename = "type")]
    pub kind: String,
    /// The amount withheld.
    pub amount: Decimal,
    /// Optional human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A typed bonus entry on a payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    /// The bonus type label.
    #[serde(rename = "type")]
    pub kind: String,
    /// The amount added.
    pub amount: Decimal,
    /// Optional human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The computed pay record for one staff member for one pay period.
///
/// Invariant: `gross_pay = base_pay + overtime_pay` where
/// `base_pay = base_hours * hourly_rate` and
/// `overtime_pay = overtime_hours * hourly_rate * multiplier`.
/// `net_pay` starts equal to `gross_pay` and is reduced only by a
/// downstream deductions-application step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaySlip {
    /// Unique identifier for the payslip.
    pub id: Uuid,
    /// The staff member this slip pays.
    pub staff_id: String,
    /// The pay period this slip covers.
    pub period_id: Uuid,
    /// Hours paid at the base rate.
    pub base_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
    /// Hourly rate snapshot taken at processing time.
    pub hourly_rate: Decimal,
    /// Total pay before deductions.
    pub gross_pay: Decimal,
    /// Typed deductions applied to this slip.
    pub deductions: Vec<Deduction>,
    /// Typed bonuses applied to this slip.
    pub bonuses: Vec<Bonus>,
    /// Pay after deductions; equals `gross_pay` until deductions run.
    pub net_pay: Decimal,
    /// The lifecycle status of the slip.
    pub status: PaySlipStatus,
    /// When the slip was paid out, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    /// How the staff member is paid.
    pub payment_method: PaymentMethod,
    /// Free-form notes attached to the slip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the slip was created.
    pub created_at: DateTime<Utc>,
}

impl PaySlip {
    /// Returns total paid hours (base plus overtime).
    pub fn total_hours(&self) -> Decimal {
        self.base_hours + self.overtime_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_slip() -> PaySlip {
        PaySlip {
            id: Uuid::new_v4(),
            staff_id: "staff_001".to_string(),
            period_id: Uuid::new_v4(),
            base_hours: dec!(8),
            overtime_hours: dec!(2),
            hourly_rate: dec!(20),
            gross_pay: dec!(220),
            deductions: vec![Deduction {
                kind: "federal_tax".to_string(),
                amount: dec!(50),
                description: None,
            }],
            bonuses: vec![],
            net_pay: dec!(170),
            status: PaySlipStatus::Paid,
            payment_date: Some(Utc::now()),
            payment_method: PaymentMethod::DirectDeposit,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_hours() {
        let slip = create_test_slip();
        assert_eq!(slip.total_hours(), dec!(10));
    }

    #[test]
    fn test_deduction_serializes_kind_as_type() {
        let deduction = Deduction {
            kind: "401k".to_string(),
            amount: dec!(30),
            description: Some("retirement".to_string()),
        };
        let json = serde_json::to_string(&deduction).unwrap();
        assert!(json.contains("\"type\":\"401k\""));
        assert!(!json.contains("kind"));
    }

    #[test]
    fn test_deduction_deserializes_from_type_field() {
        let json = r#"{"type":"health_insurance","amount":"25.50"}"#;
        let deduction: Deduction = serde_json::from_str(json).unwrap();
        assert_eq!(deduction.kind, "health_insurance");
        assert_eq!(deduction.amount, dec!(25.50));
        assert!(deduction.description.is_none());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PaySlipStatus::Processing).unwrap(),
            "\"processing\""
        );
        assert_eq!(
            serde_json::to_string(&PaySlipStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_slip_round_trip() {
        let slip = create_test_slip();
        let json = serde_json::to_string(&slip).unwrap();
        let deserialized: PaySlip = serde_json::from_str(&json).unwrap();
        assert_eq!(slip, deserialized);
    }
}
