//! Repositories over the document store.
//!
//! The surrounding product persists payroll state in an external
//! transactional document store; this engine only depends on five
//! logical collections (settings, staff profiles, periods, payslips,
//! work sessions) accessed by primary key and secondary indexes. The
//! implementations here keep each collection in memory behind a
//! read-write lock, which also serializes the overlap check-then-insert
//! on period creation.

mod payslip_repository;
mod period_repository;
mod profile_repository;
mod session_repository;
mod settings_store;

pub use payslip_repository::PayslipRepository;
pub use period_repository::{PeriodFilter, PeriodRepository};
pub use profile_repository::{ProfileRepository, ProfileUpdate};
pub use session_repository::SessionRepository;
pub use settings_store::SettingsStore;
