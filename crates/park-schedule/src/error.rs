use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("hourly arrival percentages must sum to 100, got {0}")]
    PercentSum(f64),

    #[error("arrival table declares {0} operating hours; at most 24 are allowed")]
    TooManyHours(usize),

    #[error("hourly arrival percentage for {label:?} must be a finite non-negative number, got {value}")]
    InvalidPercent { label: String, value: f64 },

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
