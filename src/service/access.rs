//! Caller identity and access checks.
//!
//! Every operation receives an authenticated caller identity resolved
//! by an external identity layer; the engine trusts it for
//! `processed_by`/`updated_by` stamping and for self-vs-admin checks.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The caller's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May read any staff member's data and perform mutating operations.
    Admin,
    /// May read only their own payslips, profile, and YTD summary.
    Staff,
}

/// An authenticated caller.
///
/// # Example
///
/// ```
/// use payroll_engine::service::CallerIdentity;
///
/// let admin = CallerIdentity::admin("admin_001");
/// let staff = CallerIdentity::staff("staff_001");
///
/// assert!(admin.can_view("staff_001"));
/// assert!(staff.can_view("staff_001"));
/// assert!(!staff.can_view("staff_002"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// The staff id of the caller.
    pub subject: String,
    /// The caller's role.
    pub role: Role,
}

impl CallerIdentity {
    /// Creates an admin identity.
    pub fn admin(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: Role::Admin,
        }
    }

    /// Creates a staff identity.
    pub fn staff(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: Role::Staff,
        }
    }

    /// Whether the caller may read the given staff member's data.
    pub fn can_view(&self, staff_id: &str) -> bool {
        self.role == Role::Admin || self.subject == staff_id
    }
}

/// Fails with [`EngineError::AccessDenied`] unless the caller may read
/// the given staff member's data.
pub fn ensure_can_view(caller: &CallerIdentity, staff_id: &str) -> EngineResult<()> {
    if caller.can_view(staff_id) {
        Ok(())
    } else {
        Err(EngineError::AccessDenied {
            staff_id: staff_id.to_string(),
        })
    }
}

/// Fails with [`EngineError::AccessDenied`] unless the caller is an admin.
///
/// The denied staff id in the error is the caller's own subject.
pub fn ensure_admin(caller: &CallerIdentity) -> EngineResult<()> {
    if caller.role == Role::Admin {
        Ok(())
    } else {
        Err(EngineError::AccessDenied {
            staff_id: caller.subject.clone(),
        })
    }
}
