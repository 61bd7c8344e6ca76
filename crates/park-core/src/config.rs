//! Engine run configuration.
//!
//! Typically deserialized from the application's park definition file and
//! passed to `ParkBuilder`.

use crate::{CoreError, CoreResult, Minute};

/// Minutes in one simulated day; the default hard stop for a run.
pub const DAY_MINUTES: u32 = 24 * 60;

/// Who may hold expedited passes and how eagerly they seek them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpeditedPolicy {
    /// Fraction of visitors able to obtain passes, in `[0, 1]`.
    pub ability_pct: f64,

    /// Standby wait (minutes) above which an able visitor seeks a pass.
    pub wait_threshold: u32,

    /// Maximum passes one visitor may hold at the same time.
    pub limit: usize,
}

impl ExpeditedPolicy {
    /// Reject ability fractions outside `[0, 1]`.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.ability_pct) {
            return Err(CoreError::OutOfRange {
                what:  "expedited ability fraction",
                value: self.ability_pct,
                min:   0.0,
                max:   1.0,
            });
        }
        Ok(())
    }
}

impl Default for ExpeditedPolicy {
    fn default() -> Self {
        Self { ability_pct: 0.0, wait_threshold: 0, limit: 0 }
    }
}

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParkConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Target number of visitors for the day.
    pub total_daily_agents: u32,

    /// Correct the sampled arrival schedule to hit `total_daily_agents`
    /// exactly.
    pub exact_arrivals: bool,

    /// Expedited-pass population parameters.
    pub expedited: ExpeditedPolicy,

    /// Hard stop for `ParkEngine::run`, in minutes.
    pub max_minutes: u32,
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            seed:               0,
            total_daily_agents: 0,
            exact_arrivals:     false,
            expedited:          ExpeditedPolicy::default(),
            max_minutes:        DAY_MINUTES,
        }
    }
}

impl ParkConfig {
    /// The minute at which `run` stops unconditionally (exclusive).
    #[inline]
    pub fn end_minute(&self) -> Minute {
        Minute(self.max_minutes)
    }
}
