//! Observer trait for progress reporting and data collection.

use park_agent::Agent;
use park_core::Minute;
use park_venue::{Activity, Attraction};

use crate::{MinuteStats, ParkHistory};

/// Read-only view of the park handed to observers.
pub struct ParkView<'a> {
    pub attractions: &'a [Attraction],
    pub activities:  &'a [Activity],
    pub agents:      &'a [Agent],
    pub history:     &'a ParkHistory,
}

/// Callbacks invoked by [`ParkEngine::run`][crate::ParkEngine::run] at key
/// points of the minute loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — hourly progress
///
/// ```rust,ignore
/// struct Hourly;
///
/// impl ParkObserver for Hourly {
///     fn on_minute_end(&mut self, now: Minute, stats: &MinuteStats, _: &ParkView<'_>) {
///         if now.is_hour_start() {
///             println!("{now}: {} in park", stats.active_agents);
///         }
///     }
/// }
/// ```
pub trait ParkObserver {
    /// Called at the very start of each minute, before arrivals.
    fn on_minute_start(&mut self, _now: Minute) {}

    /// Called after the minute's histories have been recorded.
    fn on_minute_end(&mut self, _now: Minute, _stats: &MinuteStats, _park: &ParkView<'_>) {}

    /// Called once after the final minute.
    fn on_sim_end(&mut self, _final_minute: Minute, _park: &ParkView<'_>) {}
}

/// A [`ParkObserver`] that does nothing.
pub struct NoopObserver;

impl ParkObserver for NoopObserver {}
