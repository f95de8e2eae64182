//! Staff payroll profile model and related types.
//!
//! One profile exists per staff member; the profile's status drives
//! inclusion in batch payroll processing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a staff member is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Electronic transfer to a bank account.
    DirectDeposit,
    /// Physical check.
    Check,
    /// Any other arrangement.
    Other,
}

/// Employment status of a staff member's payroll profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    /// Included in batch payroll processing.
    Active,
    /// Excluded from processing.
    Inactive,
    /// Temporarily excluded from processing.
    OnLeave,
}

/// Bank account details for direct deposit.
///
/// Routing and account numbers are opaque strings; only the derived
/// last four digits are ever exposed in read responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// Opaque account number.
    pub account_number: String,
    /// Opaque routing number.
    pub routing_number: String,
    /// Human-readable bank name.
    pub bank_name: String,
    /// Account type label (e.g. "checking", "savings").
    pub account_type: String,
}

impl BankDetails {
    /// Returns the last four characters of the account number.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::BankDetails;
    ///
    /// let details = BankDetails {
    ///     account_number: "000123456789".to_string(),
    ///     routing_number: "110000000".to_string(),
    ///     bank_name: "First National".to_string(),
    ///     account_type: "checking".to_string(),
    /// };
    /// assert_eq!(details.account_last_four(), "6789");
    /// ```
    pub fn account_last_four(&self) -> String {
        let len = self.account_number.len();
        self.account_number[len.saturating_sub(4)..].to_string()
    }

    /// Returns a masked summary safe to include in read responses.
    pub fn summary(&self) -> BankSummary {
        BankSummary {
            bank_name: self.bank_name.clone(),
            account_type: self.account_type.clone(),
            account_last_four: self.account_last_four(),
        }
    }
}

/// Masked bank details returned by profile reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    /// Human-readable bank name.
    pub bank_name: String,
    /// Account type label.
    pub account_type: String,
    /// Last four characters of the account number.
    pub account_last_four: String,
}

/// Tax withholding election for a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxWithholdings {
    /// Number of claimed allowances.
    pub allowances: u32,
    /// Filing status label (opaque to this engine).
    pub filing_status: String,
}

/// The payroll profile for one staff member.
///
/// Created on the first payroll-profile update for a staff member
/// (upsert semantics: patch if the profile exists, insert otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPayrollProfile {
    /// The staff member this profile belongs to (unique).
    pub staff_id: String,
    /// Hourly pay rate, strictly greater than zero.
    pub hourly_rate: Decimal,
    /// Whether hours above the threshold are paid at the overtime multiplier.
    pub is_overtime_eligible: bool,
    /// How the staff member is paid.
    pub payment_method: PaymentMethod,
    /// Bank details for direct deposit, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    /// Tax withholding election, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_withholdings: Option<TaxWithholdings>,
    /// Employment status; only `Active` profiles are batch-processed.
    pub status: StaffStatus,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_profile() -> StaffPayrollProfile {
        StaffPayrollProfile {
            staff_id: "staff_001".to_string(),
            hourly_rate: dec!(20),
            is_overtime_eligible: true,
            payment_method: PaymentMethod::DirectDeposit,
            bank_details: Some(BankDetails {
                account_number: "000123456789".to_string(),
                routing_number: "110000000".to_string(),
                bank_name: "First National".to_string(),
                account_type: "checking".to_string(),
            }),
            tax_withholdings: Some(TaxWithholdings {
                allowances: 2,
                filing_status: "single".to_string(),
            }),
            status: StaffStatus::Active,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_account_last_four() {
        let profile = create_test_profile();
        let details = profile.bank_details.unwrap();
        assert_eq!(details.account_last_four(), "6789");
    }

    #[test]
    fn test_account_last_four_short_number() {
        let details = BankDetails {
            account_number: "42".to_string(),
            routing_number: "110000000".to_string(),
            bank_name: "First National".to_string(),
            account_type: "checking".to_string(),
        };
        assert_eq!(details.account_last_four(), "42");
    }

    #[test]
    fn test_bank_summary_masks_numbers() {
        let profile = create_test_profile();
        let summary = profile.bank_details.unwrap().summary();
        assert_eq!(summary.account_last_four, "6789");
        assert_eq!(summary.bank_name, "First National");
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("000123456789"));
        assert!(!json.contains("110000000"));
    }

    #[test]
    fn test_payment_method_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::DirectDeposit).unwrap(),
            "\"direct_deposit\""
        );
        assert_eq!(serde_json::to_string(&PaymentMethod::Check).unwrap(), "\"check\"");
    }

    #[test]
    fn test_staff_status_serialization() {
        assert_eq!(
            serde_json::to_string(&StaffStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
    }

    #[test]
    fn test_profile_round_trip() {
        let profile = create_test_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: StaffPayrollProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }
}
