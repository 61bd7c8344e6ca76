//! Decisions — what an idle visitor chooses to do.

use park_core::{ActivityId, AttractionId};

/// The outcome of one decision for one idle visitor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Return held passes and exit the park.
    Leave,
    /// Join the standby queue of an attraction.
    Queue(AttractionId),
    /// Pick up an expedited pass and join the expedited queue.
    GetPass(AttractionId),
    /// Start a stay at an activity.
    Visit(ActivityId),
    /// Nothing to do this minute; decide again next minute.
    Wait,
}
