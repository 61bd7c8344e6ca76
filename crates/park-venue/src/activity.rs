//! Open-ended activities: no queue, no capacity, per-visitor stay times.

use serde::Deserialize;

use park_core::{ActivityId, AgentId, DrawRng, Minute, SeedStream};

use crate::{ActivitySample, History, VenueError, VenueResult};

/// Valid activity popularity weights.  A weight of 0 is never chosen.
pub const POPULARITY_RANGE: std::ops::RangeInclusive<u32> = 0..=10;

/// Static activity characteristics from the park definition.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActivitySpec {
    pub name:       String,
    /// Selection weight, 0–10.
    pub popularity: u32,
    /// Mean stay in minutes.
    pub mean_time:  f64,
}

impl ActivitySpec {
    pub fn validate(&self) -> VenueResult<()> {
        if !POPULARITY_RANGE.contains(&self.popularity) {
            return Err(VenueError::InvalidPopularity {
                kind:  "activity",
                name:  self.name.clone(),
                value: self.popularity,
                min:   *POPULARITY_RANGE.start(),
                max:   *POPULARITY_RANGE.end(),
            });
        }
        if !self.mean_time.is_finite() || self.mean_time < 0.0 {
            return Err(VenueError::InvalidMeanTime {
                name:  self.name.clone(),
                value: self.mean_time,
            });
        }
        Ok(())
    }
}

/// A visitor and the minutes left in their stay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Visit {
    pub agent:     AgentId,
    pub remaining: u32,
}

/// An activity and its current visitors, in admission order.
pub struct Activity {
    id:      ActivityId,
    spec:    ActivitySpec,
    seed:    u64,
    visits:  Vec<Visit>,
    history: History<ActivitySample>,
}

impl Activity {
    /// Validate `spec` and build an empty activity.  `seed` is the run's
    /// base seed; stay times derive from it per agent.
    pub fn new(id: ActivityId, spec: ActivitySpec, seed: u64) -> VenueResult<Self> {
        spec.validate()?;
        Ok(Self { id, spec, seed, visits: Vec::new(), history: History::new() })
    }

    /// Admit `agent` and return its stay in minutes.
    ///
    /// The stay is drawn from `N(mean, mean / 2)` and floored at 1.  When the
    /// agent holds expedited passes, `deadlines` are their return countdowns
    /// and the stay is capped at `max(1, min(deadlines))`.
    pub fn add_to_activity(&mut self, agent: AgentId, deadlines: &[i64]) -> u32 {
        let mut rng = DrawRng::scoped(
            SeedStream::Stay,
            self.seed,
            &[agent.as_u64(), self.id.as_u64()],
        );
        let mean = self.spec.mean_time;
        let mut stay = rng.normal(mean, mean / 2.0).max(1.0) as u32;

        if let Some(&soonest) = deadlines.iter().min() {
            let cap = soonest.clamp(1, i64::from(u32::MAX)) as u32;
            stay = stay.min(cap);
        }

        self.visits.push(Visit { agent, remaining: stay });
        stay
    }

    /// Remove every visitor whose stay has run out and return them in
    /// admission order.
    pub fn step(&mut self, _now: Minute) -> Vec<AgentId> {
        let mut exited = Vec::new();
        self.visits.retain(|v| {
            if v.remaining == 0 {
                exited.push(v.agent);
                false
            } else {
                true
            }
        });
        exited
    }

    /// Remove `agent` regardless of its remaining time.  Other visitors are
    /// untouched.
    pub fn force_exit(&mut self, agent: AgentId) -> Option<Visit> {
        let pos = self.visits.iter().position(|v| v.agent == agent)?;
        Some(self.visits.remove(pos))
    }

    /// One minute passes for every visitor.
    pub fn pass_time(&mut self) {
        for visit in &mut self.visits {
            visit.remaining = visit.remaining.saturating_sub(1);
        }
    }

    pub fn record_history(&mut self, now: Minute) {
        let sample = ActivitySample { visitors: self.visits.len() as u32 };
        self.history.record(now, sample);
    }

    #[inline]
    pub fn id(&self) -> ActivityId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    #[inline]
    pub fn spec(&self) -> &ActivitySpec {
        &self.spec
    }

    #[inline]
    pub fn popularity(&self) -> u32 {
        self.spec.popularity
    }

    #[inline]
    pub fn visitor_count(&self) -> usize {
        self.visits.len()
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn history(&self) -> &History<ActivitySample> {
        &self.history
    }
}
