//! Append-only store for payroll settings records.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::PayrollSettings;

/// Holds the payroll configuration history.
///
/// Records are append-only and never mutated; the most recently
/// appended record is the single "current" configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayFrequency, PayrollSettings};
/// use payroll_engine::store::SettingsStore;
/// use rust_decimal_macros::dec;
///
/// let store = SettingsStore::default();
/// assert!(store.current().is_none());
///
/// store.append(PayrollSettings::new(
///     PayFrequency::Weekly, 1, dec!(40), dec!(1.5), dec!(2.0), dec!(1.5), "admin_001",
/// ));
/// assert_eq!(store.current().unwrap().pay_frequency, PayFrequency::Weekly);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SettingsStore {
    records: Arc<RwLock<Vec<PayrollSettings>>>,
}

impl SettingsStore {
    fn read(&self) -> RwLockReadGuard<'_, Vec<PayrollSettings>> {
        self.records.read().expect("settings lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<PayrollSettings>> {
        self.records.write().expect("settings lock poisoned")
    }

    /// Appends a new settings record, making it current.
    pub fn append(&self, settings: PayrollSettings) {
        self.write().push(settings);
    }

    /// Returns the current settings record, if any exist.
    pub fn current(&self) -> Option<PayrollSettings> {
        self.read().last().cloned()
    }

    /// Returns the full settings history, oldest first.
    pub fn history(&self) -> Vec<PayrollSettings> {
        self.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayFrequency;
    use rust_decimal_macros::dec;

    fn settings(frequency: PayFrequency, author: &str) -> PayrollSettings {
        PayrollSettings::new(frequency, 1, dec!(40), dec!(1.5), dec!(2.0), dec!(1.5), author)
    }

    #[test]
    fn test_empty_store_has_no_current() {
        let store = SettingsStore::default();
        assert!(store.current().is_none());
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_latest_append_is_current() {
        let store = SettingsStore::default();
        store.append(settings(PayFrequency::Weekly, "admin_001"));
        store.append(settings(PayFrequency::Monthly, "admin_002"));

        let current = store.current().unwrap();
        assert_eq!(current.pay_frequency, PayFrequency::Monthly);
        assert_eq!(current.updated_by, "admin_002");
    }

    #[test]
    fn test_history_retains_older_records() {
        let store = SettingsStore::default();
        store.append(settings(PayFrequency::Weekly, "admin_001"));
        store.append(settings(PayFrequency::Biweekly, "admin_001"));

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].pay_frequency, PayFrequency::Weekly);
        assert_eq!(history[1].pay_frequency, PayFrequency::Biweekly);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SettingsStore::default();
        let view = store.clone();
        store.append(settings(PayFrequency::Semimonthly, "admin_001"));
        assert_eq!(
            view.current().unwrap().pay_frequency,
            PayFrequency::Semimonthly
        );
    }
}
