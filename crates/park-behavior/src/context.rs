//! Read-only park state passed to every decision.

use park_core::{Minute, ParkClock};
use park_venue::{Activity, Attraction};

/// A read-only view of the park for one decision.
///
/// Registries are in engine order (popularity ascending) and indexed by
/// `AttractionId` / `ActivityId`.
pub struct DecisionContext<'a> {
    /// Current minute and closing minute.
    pub clock:       ParkClock,

    /// Base seed of the run, for scoped draws.
    pub seed:        u64,

    pub attractions: &'a [Attraction],
    pub activities:  &'a [Activity],
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(
        clock:       ParkClock,
        seed:        u64,
        attractions: &'a [Attraction],
        activities:  &'a [Activity],
    ) -> Self {
        Self { clock, seed, attractions, activities }
    }

    #[inline]
    pub fn now(&self) -> Minute {
        self.clock.now
    }

    #[inline]
    pub fn park_closed(&self) -> bool {
        self.clock.is_closed()
    }
}
