//! Read-only projections over the record log for history views.
//!
//! # Responsibility
//! - Map grid coordinates to coarse intensity levels.
//! - Group newest-first records into calendar-day sections.

mod grouping;
mod levels;

pub use grouping::{group_records_by_day, DaySection};
pub use levels::{energy_level, pleasure_level, IntensityLevel};
