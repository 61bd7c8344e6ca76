//! `ParkBehavior` — the stock visitor decision tree.
//!
//! # Decision order
//!
//! 1. Park closed → [`Decision::Leave`].
//! 2. Leave check: skipped on the arrival minute, otherwise leave when
//!    `(now - arrival) - stay_preference` exceeds an `N(0, 60)` draw.
//! 3. Coin flip against `attraction_preference`: try an attraction, and fall
//!    back to an activity if none is acceptable.
//! 4. Attraction candidates: no held pass for it, not yet ridden unless
//!    repeats are allowed, admitted by the age class.
//! 5. Popularity-weighted draw among the candidates, then in order:
//!    seek a pass, reject for a long wait, reject for a pass-deadline
//!    clash, or queue.  A rejected candidate leaves the set, so the loop
//!    runs at most once per candidate.
//! 6. Popularity-weighted activity.  With no selectable activity the
//!    visitor waits a minute.

use park_agent::Agent;
use park_core::{AgentRng, AttractionId, DrawRng, SeedStream};
use park_venue::Attraction;

use crate::{BehaviorModel, Decision, DecisionContext};

/// Stock behavior with its tunable constants.
#[derive(Clone, Debug, PartialEq)]
pub struct ParkBehavior {
    /// Extra standby minutes tolerated per popularity point.
    pub popularity_wait_bonus: u32,
    /// Standard deviation of the leave threshold, in minutes.
    pub leave_jitter:          f64,
}

impl Default for ParkBehavior {
    fn default() -> Self {
        Self { popularity_wait_bonus: 6, leave_jitter: 60.0 }
    }
}

impl ParkBehavior {
    /// `true` if the visitor decides its visit is long enough.
    pub fn wants_to_leave(&self, agent: &Agent, ctx: &DecisionContext<'_>) -> bool {
        let now = ctx.now();
        let Some(arrival) = agent.arrival() else {
            return false;
        };
        if arrival == now {
            return false;
        }
        let excess = (now - arrival) as f64 - f64::from(agent.profile().stay_time_preference);
        let mut rng = DrawRng::scoped(
            SeedStream::Leave,
            ctx.seed,
            &[agent.id().as_u64(), u64::from(now.0)],
        );
        excess > rng.normal(0.0, self.leave_jitter)
    }

    /// Attractions the visitor would consider, in registry order.
    pub fn eligible_attractions(&self, agent: &Agent, ctx: &DecisionContext<'_>) -> Vec<AttractionId> {
        let profile = agent.profile();
        ctx.attractions
            .iter()
            .filter(|a| !agent.passes().contains(a.id()))
            .filter(|a| profile.allow_repeats || agent.rides_completed(a.id()) == 0)
            .filter(|a| profile.age_class.admits(a.child_eligible(), a.adult_eligible()))
            .map(Attraction::id)
            .collect()
    }

    /// Draw among `candidates` until one is accepted or none are left.
    pub fn select_attraction(
        &self,
        agent:          &Agent,
        ctx:            &DecisionContext<'_>,
        rng:            &mut AgentRng,
        mut candidates: Vec<AttractionId>,
    ) -> Option<Decision> {
        let profile = agent.profile();
        let deadlines = agent.passes().deadlines();

        while !candidates.is_empty() {
            let weights: Vec<f64> = candidates
                .iter()
                .map(|id| f64::from(ctx.attractions[id.index()].popularity()))
                .collect();
            let pick = rng.choose_weighted(&weights)?;
            let attraction = &ctx.attractions[candidates[pick].index()];
            let wait = attraction.wait_time();

            let can_hold_more = agent.passes().len() < profile.exp_limit;
            if wait > profile.exp_wait_threshold
                && profile.expedited_ability
                && can_hold_more
                && attraction.has_passes()
            {
                return Some(Decision::GetPass(attraction.id()));
            }

            let tolerance = profile.wait_threshold + attraction.popularity() * self.popularity_wait_bonus;
            let busy_until = i64::from(wait + attraction.run_time());
            if wait > tolerance || deadlines.iter().any(|&d| d < busy_until) {
                candidates.remove(pick);
                continue;
            }

            return Some(Decision::Queue(attraction.id()));
        }
        None
    }

    /// Popularity-weighted activity, or [`Decision::Wait`] if none can be
    /// chosen.
    pub fn select_activity(&self, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Decision {
        let weights: Vec<f64> = ctx.activities.iter().map(|a| f64::from(a.popularity())).collect();
        match rng.choose_weighted(&weights) {
            Some(i) => Decision::Visit(ctx.activities[i].id()),
            None => Decision::Wait,
        }
    }
}

impl BehaviorModel for ParkBehavior {
    fn decide(&self, agent: &Agent, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Decision {
        if ctx.park_closed() || self.wants_to_leave(agent, ctx) {
            return Decision::Leave;
        }

        if rng.uniform() <= agent.profile().attraction_preference {
            let candidates = self.eligible_attractions(agent, ctx);
            if let Some(decision) = self.select_attraction(agent, ctx, rng, candidates) {
                return decision;
            }
        }

        self.select_activity(ctx, rng)
    }
}
