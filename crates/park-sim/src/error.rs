use thiserror::Error;

use park_agent::AgentError;
use park_core::CoreError;
use park_schedule::ScheduleError;
use park_venue::VenueError;

/// Any failure while assembling a park.  Stepping itself never fails.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("park configuration error: {0}")]
    Config(String),

    #[error("{what} registry holds {got} entries, at most {max} are supported")]
    TooManyVenues {
        what: &'static str,
        got:  usize,
        max:  usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("arrival schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Venue(#[from] VenueError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
