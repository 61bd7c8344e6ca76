use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(
        "archetype {name:?}: percent_no_child_rides, percent_no_adult_rides and \
         percent_no_preference must add up to 1, got {sum}"
    )]
    AgeClassSum { name: String, sum: f64 },

    #[error("archetype {name:?}: attraction_preference must be within [0, 1], got {value}")]
    AttractionPreference { name: String, value: f64 },

    #[error("archetype {name:?}: {field} must be finite and non-negative, got {value}")]
    NegativeParameter {
        name:  String,
        field: &'static str,
        value: f64,
    },

    #[error("archetype mix percentages must add up to 100, got {0}")]
    MixSum(f64),

    #[error("archetype mix names unknown archetype {0:?}")]
    UnknownArchetype(String),

    #[error("archetype {0:?} is defined twice")]
    DuplicateArchetype(String),

    #[error(transparent)]
    Core(#[from] park_core::CoreError),
}

pub type AgentResult<T> = Result<T, AgentError>;
