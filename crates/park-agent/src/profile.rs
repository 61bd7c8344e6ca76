//! Immutable per-visitor behavior parameters.

use serde::{Deserialize, Serialize};

/// Which attractions a visitor is willing to consider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeClass {
    /// Rides adult-only and dual-eligible attractions.
    NoChildRides,
    /// Rides child-only and dual-eligible attractions.
    NoAdultRides,
    /// Rides anything.
    NoPreference,
}

impl AgeClass {
    /// Selection order used when drawing from archetype percentages.
    pub const ALL: [AgeClass; 3] =
        [AgeClass::NoChildRides, AgeClass::NoAdultRides, AgeClass::NoPreference];

    /// `true` if a visitor of this class would ride an attraction with the
    /// given eligibility flags.
    pub fn admits(self, child_eligible: bool, adult_eligible: bool) -> bool {
        match self {
            AgeClass::NoChildRides => adult_eligible,
            AgeClass::NoAdultRides => child_eligible,
            AgeClass::NoPreference => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeClass::NoChildRides => "no_child_rides",
            AgeClass::NoAdultRides => "no_adult_rides",
            AgeClass::NoPreference => "no_preference",
        }
    }
}

impl std::fmt::Display for AgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything about a visitor that is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorProfile {
    /// Name of the archetype the visitor was drawn from.
    pub archetype:             String,
    /// Preferred total stay in minutes.
    pub stay_time_preference:  u32,
    pub allow_repeats:         bool,
    /// Probability of trying an attraction before an activity.
    pub attraction_preference: f64,
    /// Base tolerance for standby waits, in minutes.
    pub wait_threshold:        u32,
    pub age_class:             AgeClass,

    // ── Expedited passes ──────────────────────────────────────────────────
    pub expedited_ability:     bool,
    /// Standby wait above which a pass is sought.
    pub exp_wait_threshold:    u32,
    /// Maximum passes held at once.
    pub exp_limit:             usize,
}
