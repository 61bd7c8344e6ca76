//! Park-wide metrics recorded once per minute.

use park_core::Minute;
use park_venue::History;

/// One minute of park-wide metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParkSample {
    /// Agents inside the park at the end of the minute.
    pub active_agents:      u32,
    /// Passes issued so far today.
    pub passes_distributed: u32,
    /// Passes redeemed at boarding so far today.
    pub passes_redeemed:    u32,
}

/// Running pass totals plus the per-minute park history.
#[derive(Clone, Debug, Default)]
pub struct ParkHistory {
    pub passes_distributed: u32,
    pub passes_redeemed:    u32,
    pub samples:            History<ParkSample>,
}

impl ParkHistory {
    pub fn record(&mut self, now: Minute, active_agents: u32) {
        let sample = ParkSample {
            active_agents,
            passes_distributed: self.passes_distributed,
            passes_redeemed:    self.passes_redeemed,
        };
        self.samples.record(now, sample);
    }

    /// Active agents recorded at `minute`.
    pub fn active_at(&self, minute: Minute) -> Option<u32> {
        self.samples.get(minute).map(|s| s.active_agents)
    }

    /// Highest active-agent count of the day so far.
    pub fn peak_active(&self) -> u32 {
        self.samples.iter().map(|(_, s)| s.active_agents).max().unwrap_or(0)
    }
}
