//! `park-schedule` — when visitors arrive.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                 |
//! |------------------|----------------------------------------------------------|
//! | [`distribution`] | `HourlyDistribution` — percent of daily visitors per hour |
//! | [`arrival`]      | `ArrivalSchedule` — sampled visitor count per minute      |
//! | [`loader`]       | `load_hourly_csv`, `load_hourly_reader`                   |
//! | [`error`]        | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Sampling model (summary)
//!
//! ```text
//! lambda(hour)      = total * pct(hour) / 100 / 60
//! arrivals(minute)  = Poisson(lambda(minute / 60)), seeded by (seed + hour)
//! close             = 60 * first hour whose pct == 0
//! ```
//!
//! With exact totals requested, the sampled schedule is then nudged one
//! visitor at a time until it sums to the target.

pub mod arrival;
pub mod distribution;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use arrival::ArrivalSchedule;
pub use distribution::{HourShare, HourlyDistribution, MAX_HOURS};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_hourly_csv, load_hourly_reader};
