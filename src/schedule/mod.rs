//! Pay period scheduling.
//!
//! This module contains the pure per-frequency boundary calculation and
//! the generator loop that persists successive non-overlapping periods
//! up to a caller-supplied horizon.

mod generator;
mod period_bounds;

pub use generator::{GenerationOutcome, generate_periods};
pub use period_bounds::{end_of_day, period_bounds};
