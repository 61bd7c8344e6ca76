//! The `ParkEngine` struct and its minute loop.

use park_agent::{Action, Agent, Location, LogEntry};
use park_behavior::{BehaviorModel, Decision, DecisionContext};
use park_core::{AgentId, AgentRng, AttractionId, Minute, ParkClock, ParkConfig};
use park_schedule::ArrivalSchedule;
use park_venue::{Activity, Attraction};

use crate::{ParkHistory, ParkObserver, ParkSummary, ParkView};

/// Counters for one processed minute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinuteStats {
    pub arrivals:      u32,
    /// Idle agents asked for a decision.
    pub decisions:     u32,
    pub boarded:       u32,
    pub departures:    u32,
    /// Agents inside the park at the end of the minute.
    pub active_agents: u32,
}

// ── ParkEngine ────────────────────────────────────────────────────────────────

/// The park simulation runner.
///
/// Holds every agent, attraction and activity for the day and drives the
/// eight-step minute loop described in the crate docs.  Registries are
/// fixed at build time in popularity-ascending order, which is also the
/// order attractions board and activities release visitors.
///
/// Create via [`ParkBuilder`][crate::ParkBuilder].
pub struct ParkEngine<B: BehaviorModel> {
    pub config:      ParkConfig,

    /// Current minute and the fixed closing minute.
    pub clock:       ParkClock,

    pub schedule:    ArrivalSchedule,

    /// Agents indexed by `AgentId`, in arrival order.
    pub agents:      Vec<Agent>,

    /// Per-agent decision streams, separated for the split-borrow pattern.
    pub rngs:        Vec<AgentRng>,

    /// Indexed by `AttractionId`.
    pub attractions: Vec<Attraction>,

    /// Indexed by `ActivityId`.
    pub activities:  Vec<Activity>,

    pub behavior:    B,

    pub history:     ParkHistory,

    /// Id of the next agent to arrive.
    next_arrival:    usize,
}

impl<B: BehaviorModel> ParkEngine<B> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        config:      ParkConfig,
        clock:       ParkClock,
        schedule:    ArrivalSchedule,
        agents:      Vec<Agent>,
        rngs:        Vec<AgentRng>,
        attractions: Vec<Attraction>,
        activities:  Vec<Activity>,
        behavior:    B,
    ) -> Self {
        Self {
            config,
            clock,
            schedule,
            agents,
            rngs,
            attractions,
            activities,
            behavior,
            history: ParkHistory::default(),
            next_arrival: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every scheduled visitor has arrived and left, or until
    /// `config.max_minutes`.
    pub fn run<O: ParkObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_minute();
        loop {
            let now = self.clock.now;
            if now >= end || self.is_finished() {
                break;
            }
            self.step_observed(observer);
        }
        observer.on_sim_end(self.clock.now, &self.view());
        log::info!(
            "park day ended at {}: {} visitors, {} passes issued, {} redeemed",
            self.clock.now,
            self.next_arrival,
            self.history.passes_distributed,
            self.history.passes_redeemed,
        );
    }

    /// Run exactly `n` minutes from the current position, ignoring the end
    /// conditions.
    pub fn run_minutes<O: ParkObserver>(&mut self, n: u32, observer: &mut O) {
        for _ in 0..n {
            self.step_observed(observer);
        }
    }

    /// `true` once the schedule is exhausted and nobody is left inside.
    pub fn is_finished(&self) -> bool {
        self.clock.now >= self.schedule.horizon() && self.active_agents() == 0
    }

    /// Agents currently inside the park.
    pub fn active_agents(&self) -> u32 {
        self.agents.iter().filter(|a| a.is_present()).count() as u32
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Human-readable history of one visitor.
    pub fn agent_log(&self, id: AgentId) -> Option<&[LogEntry]> {
        self.agent(id).map(Agent::log)
    }

    /// Logs of the first `n` visitors that entered the park.
    pub fn sample_logs(&self, n: usize) -> Vec<(AgentId, &[LogEntry])> {
        self.agents
            .iter()
            .filter(|a| a.arrival().is_some())
            .take(n)
            .map(|a| (a.id(), a.log()))
            .collect()
    }

    pub fn attraction_by_name(&self, name: &str) -> Option<&Attraction> {
        self.attractions.iter().find(|a| a.name() == name)
    }

    pub fn activity_by_name(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name() == name)
    }

    pub fn view(&self) -> ParkView<'_> {
        ParkView {
            attractions: &self.attractions,
            activities:  &self.activities,
            agents:      &self.agents,
            history:     &self.history,
        }
    }

    /// End-of-day metrics computed from the current state and histories.
    pub fn summary(&self) -> ParkSummary {
        ParkSummary::collect(&self.view(), self.clock.close)
    }

    // ── Minute processing ─────────────────────────────────────────────────

    fn step_observed<O: ParkObserver>(&mut self, observer: &mut O) {
        let now = self.clock.now;
        observer.on_minute_start(now);
        let stats = self.process_minute(now);
        observer.on_minute_end(now, &stats, &self.view());
        if now.is_hour_start() {
            log::debug!(
                "{now}: {} in park, {} passes issued, {} redeemed",
                stats.active_agents,
                self.history.passes_distributed,
                self.history.passes_redeemed,
            );
        }
        self.clock.advance();
    }

    fn process_minute(&mut self, now: Minute) -> MinuteStats {
        let mut stats = MinuteStats::default();

        // ── ① Arrivals ────────────────────────────────────────────────────
        let arrivals = self.schedule.arrivals_at(now) as usize;
        let upto = (self.next_arrival + arrivals).min(self.agents.len());
        for agent in &mut self.agents[self.next_arrival..upto] {
            agent.arrive_at_park(now);
        }
        stats.arrivals = (upto - self.next_arrival) as u32;
        self.next_arrival = upto;

        // ── ② Idle snapshot ───────────────────────────────────────────────
        let idle: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|a| a.is_idle())
            .map(Agent::id)
            .collect();
        stats.decisions = idle.len() as u32;

        // ── ③ Decide and apply, one agent at a time ───────────────────────
        for id in idle {
            let decision = {
                let ctx = DecisionContext::new(
                    self.clock,
                    self.config.seed,
                    &self.attractions,
                    &self.activities,
                );
                let rng = &mut self.rngs[id.index()];
                debug_assert_eq!(rng.agent(), id);
                self.behavior.decide(&self.agents[id.index()], &ctx, rng)
            };
            if decision == Decision::Leave {
                stats.departures += 1;
            }
            self.apply(id, decision, now);
        }

        // ── ④ Attractions ─────────────────────────────────────────────────
        for i in 0..self.attractions.len() {
            stats.boarded += self.step_attraction(i, now);
        }

        // ── ⑤ Activities ──────────────────────────────────────────────────
        for activity in &mut self.activities {
            let exited = activity.step(now);
            for agent in exited {
                self.agents[agent.index()].agent_exited_activity(activity.id(), activity.name(), now);
            }
        }

        // ── ⑥ Time and histories ──────────────────────────────────────────
        for agent in &mut self.agents {
            agent.pass_time();
        }
        for attraction in &mut self.attractions {
            attraction.pass_time();
            attraction.record_history(now);
        }
        for activity in &mut self.activities {
            activity.pass_time();
            activity.record_history(now);
        }

        // ── ⑦ Park totals ─────────────────────────────────────────────────
        stats.active_agents = self.active_agents();
        self.history.record(now, stats.active_agents);

        stats
    }

    /// Apply one decision to the agent and the venue it names.
    ///
    /// Ids out of range and pass requests the attraction cannot honor leave
    /// the agent idle for the minute.
    fn apply(&mut self, id: AgentId, decision: Decision, now: Minute) {
        let agent = &mut self.agents[id.index()];
        match decision {
            Decision::Leave => {
                for held in agent.passes().attractions() {
                    if let Some(attraction) = self.attractions.get_mut(held.index()) {
                        attraction.return_pass(id);
                        agent.return_pass(held, attraction.name(), now);
                    }
                }
                agent.leave_park(now);
            }

            Decision::Queue(target) => {
                let Some(attraction) = self.attractions.get_mut(target.index()) else {
                    log::warn!("{id} chose unknown {target}");
                    return;
                };
                agent.enter_queue(target, attraction.name(), now);
                attraction.add_to_queue(id);
            }

            Decision::GetPass(target) => {
                let Some(attraction) = self.attractions.get_mut(target.index()) else {
                    log::warn!("{id} chose unknown {target}");
                    return;
                };
                if !attraction.has_passes() || !agent.get_pass(target, attraction.name(), now) {
                    return;
                }
                attraction.issue_pass();
                let wait = attraction.add_to_exp_queue(id);
                agent.assign_expedited_return_time(target, wait, now);
                self.history.passes_distributed += 1;
            }

            Decision::Visit(target) => {
                let Some(activity) = self.activities.get_mut(target.index()) else {
                    log::warn!("{id} chose unknown {target}");
                    return;
                };
                let deadlines = agent.passes().deadlines();
                activity.add_to_activity(id, &deadlines);
                agent.begin_activity(target, activity.name(), now);
            }

            Decision::Wait => {}
        }
    }

    /// Step attraction `index` and route its riders.  Returns the number of
    /// agents boarded.
    fn step_attraction(&mut self, index: usize, now: Minute) -> u32 {
        let outcome = self.attractions[index].step(self.clock);
        let attraction_id = self.attractions[index].id();
        let name = self.attractions[index].name().to_owned();

        for agent in &outcome.exited {
            self.agents[agent.index()].agent_exited_attraction(attraction_id, &name, now);
        }

        for &agent in &outcome.boarded {
            self.release_from_elsewhere(agent, attraction_id, now);
            if self.agents[agent.index()].agent_boarded_attraction(attraction_id, &name, now) {
                self.history.passes_redeemed += 1;
            }
        }
        outcome.boarded.len() as u32
    }

    /// Pull a boarding agent out of whatever it was doing elsewhere: an
    /// activity stay or another attraction's standby queue.
    fn release_from_elsewhere(&mut self, id: AgentId, boarding: AttractionId, now: Minute) {
        let agent = &mut self.agents[id.index()];
        match (agent.action(), agent.location()) {
            (Action::Browsing, Location::Activity(activity)) => {
                if let Some(venue) = self.activities.get_mut(activity.index()) {
                    venue.force_exit(id);
                    agent.agent_exited_activity(activity, venue.name(), now);
                }
            }
            (Action::Queueing, Location::Attraction(other)) if other != boarding => {
                if let Some(venue) = self.attractions.get_mut(other.index()) {
                    venue.leave_queue(id);
                }
            }
            _ => {}
        }
    }
}
