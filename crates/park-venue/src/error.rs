use thiserror::Error;

#[derive(Debug, Error)]
pub enum VenueError {
    #[error("{kind} {name:?}: popularity must be an integer between {min} and {max}, got {value}")]
    InvalidPopularity {
        kind:  &'static str,
        name:  String,
        value: u32,
        min:   u32,
        max:   u32,
    },

    #[error("attraction {name:?}: run_time must be at least 1 minute")]
    InvalidRunTime { name: String },

    #[error("attraction {name:?}: {hourly_throughput}/h over a {run_time} min cycle seats nobody")]
    ZeroCapacity {
        name:              String,
        hourly_throughput: u32,
        run_time:          u32,
    },

    #[error("attraction {name:?}: {hourly_throughput}/h over a {run_time} min cycle is too large")]
    ThroughputOverflow {
        name:              String,
        hourly_throughput: u32,
        run_time:          u32,
    },

    #[error("attraction {name:?}: expedited_queue_ratio must be within [0, 1], got {ratio}")]
    InvalidRatio { name: String, ratio: f64 },

    #[error("attraction {name:?}: expedited queue enabled but capacity {capacity} x ratio {ratio} reserves no seats")]
    NoExpeditedSeats {
        name:     String,
        capacity: u32,
        ratio:    f64,
    },

    #[error("activity {name:?}: mean_time must be a finite non-negative number of minutes, got {value}")]
    InvalidMeanTime { name: String, value: f64 },
}

pub type VenueResult<T> = Result<T, VenueError>;
