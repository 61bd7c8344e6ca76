//! Fluent builder that draws the day's visitors and their decision streams.
//!
//! # Usage
//!
//! ```rust
//! use park_agent::{ArchetypeMix, ArchetypeTable, PopulationBuilder};
//! use park_core::ExpeditedPolicy;
//!
//! let (agents, rngs) = PopulationBuilder::new(/*seed=*/ 7)
//!     .archetypes(ArchetypeTable::standard())
//!     .mix(ArchetypeMix::from_pairs([("ride_enthusiast", 40.0), ("park_visitor", 60.0)]))
//!     .expedited(ExpeditedPolicy { ability_pct: 0.5, wait_threshold: 30, limit: 1 })
//!     .venues(/*attractions=*/ 4, /*activities=*/ 2)
//!     .build(100)
//!     .unwrap();
//!
//! assert_eq!(agents.len(), 100);
//! assert_eq!(rngs.len(), 100);
//! ```

use park_core::{AgentId, AgentRng, DrawRng, ExpeditedPolicy, SeedStream};

use crate::{
    AgeClass, Agent, AgentError, AgentResult, ArchetypeMix, ArchetypeTable, BehaviorProfile,
};

/// Builds `Vec<Agent>` plus one [`AgentRng`] per agent.
///
/// Every profile draw for agent `i` comes from [`SeedStream::Profile`]
/// scoped to `i`, so populations of different sizes agree on their common
/// prefix.
pub struct PopulationBuilder {
    seed:          u64,
    table:         ArchetypeTable,
    mix:           ArchetypeMix,
    policy:        ExpeditedPolicy,
    n_attractions: usize,
    n_activities:  usize,
}

impl PopulationBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            table:         ArchetypeTable::standard(),
            mix:           ArchetypeMix::new(Vec::new()),
            policy:        ExpeditedPolicy::default(),
            n_attractions: 0,
            n_activities:  0,
        }
    }

    pub fn archetypes(mut self, table: ArchetypeTable) -> Self {
        self.table = table;
        self
    }

    pub fn mix(mut self, mix: ArchetypeMix) -> Self {
        self.mix = mix;
        self
    }

    pub fn expedited(mut self, policy: ExpeditedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Registry sizes, used to size each agent's per-venue tallies.
    pub fn venues(mut self, n_attractions: usize, n_activities: usize) -> Self {
        self.n_attractions = n_attractions;
        self.n_activities = n_activities;
        self
    }

    /// Validate the table, mix and policy, then draw `count` agents with ids
    /// `0..count`.
    pub fn build(self, count: u32) -> AgentResult<(Vec<Agent>, Vec<AgentRng>)> {
        self.table.validate()?;
        self.mix.validate(&self.table)?;
        self.policy.validate()?;

        let weights = self.mix.weights();
        let mut agents = Vec::with_capacity(count as usize);
        let mut rngs = Vec::with_capacity(count as usize);
        for i in 0..count {
            let id = AgentId(i);
            let profile = self.draw_profile(id, &weights)?;
            agents.push(Agent::new(id, profile, self.n_attractions, self.n_activities));
            rngs.push(AgentRng::new(self.seed, id));
        }
        log::info!("generated {} agents from {} archetypes", agents.len(), self.mix.shares().len());
        Ok((agents, rngs))
    }

    fn draw_profile(&self, id: AgentId, weights: &[f64]) -> AgentResult<BehaviorProfile> {
        let mut rng = DrawRng::scoped(SeedStream::Profile, self.seed, &[id.as_u64()]);

        let share = rng
            .choose_weighted(weights)
            .map(|i| &self.mix.shares()[i])
            .ok_or(AgentError::MixSum(0.0))?;
        let params = self
            .table
            .get(&share.archetype)
            .ok_or_else(|| AgentError::UnknownArchetype(share.archetype.clone()))?;

        let age_class = rng
            .choose_weighted(&params.age_weights())
            .map(|i| AgeClass::ALL[i])
            .ok_or_else(|| AgentError::AgeClassSum { name: params.name.clone(), sum: 0.0 })?;

        let pref = params.stay_time_preference;
        let stay_time_preference = rng.normal(pref, pref / 4.0).max(0.0) as u32;
        let expedited_ability = rng.uniform() < self.policy.ability_pct;

        Ok(BehaviorProfile {
            archetype: params.name.clone(),
            stay_time_preference,
            allow_repeats: params.allow_repeats,
            attraction_preference: params.attraction_preference,
            wait_threshold: params.wait_threshold,
            age_class,
            expedited_ability,
            exp_wait_threshold: self.policy.wait_threshold,
            exp_limit: self.policy.limit,
        })
    }
}
