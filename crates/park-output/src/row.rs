//! Plain data row types written by output backends.

use park_agent::Agent;
use park_core::Minute;
use park_venue::{ActivitySample, AttractionSample};

/// Queue metrics of one attraction at one minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttractionHistoryRow {
    pub minute:           u32,
    pub attraction:       String,
    pub queue_length:     u32,
    pub wait_time:        u32,
    pub exp_queue_length: u32,
    pub exp_wait_time:    u32,
}

impl AttractionHistoryRow {
    pub fn new(minute: Minute, attraction: &str, sample: &AttractionSample) -> Self {
        Self {
            minute:           minute.0,
            attraction:       attraction.to_owned(),
            queue_length:     sample.queue_length,
            wait_time:        sample.wait_time,
            exp_queue_length: sample.exp_queue_length,
            exp_wait_time:    sample.exp_wait_time,
        }
    }
}

/// Visitor count of one activity at one minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityHistoryRow {
    pub minute:   u32,
    pub activity: String,
    pub visitors: u32,
}

impl ActivityHistoryRow {
    pub fn new(minute: Minute, activity: &str, sample: &ActivitySample) -> Self {
        Self { minute: minute.0, activity: activity.to_owned(), visitors: sample.visitors }
    }
}

/// Park-wide totals at one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkHistoryRow {
    pub minute:             u32,
    pub active_agents:      u32,
    pub passes_distributed: u32,
    pub passes_redeemed:    u32,
}

/// End-of-day record of one visitor.
///
/// `arrival` and `exit` are `None` for visitors who never arrived or never
/// left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRow {
    pub agent_id:           u32,
    pub archetype:          String,
    pub age_class:          &'static str,
    pub expedited_ability:  bool,
    pub arrival:            Option<u32>,
    pub exit:               Option<u32>,
    pub rides_completed:    u32,
    pub activities_visited: u32,
}

impl From<&Agent> for AgentRow {
    fn from(agent: &Agent) -> Self {
        let profile = agent.profile();
        Self {
            agent_id:           agent.id().0,
            archetype:          profile.archetype.clone(),
            age_class:          profile.age_class.as_str(),
            expedited_ability:  profile.expedited_ability,
            arrival:            agent.arrival().map(|m| m.0),
            exit:               agent.exit().map(|m| m.0),
            rides_completed:    agent.total_rides(),
            activities_visited: agent.total_activity_visits(),
        }
    }
}
