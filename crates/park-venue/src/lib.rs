//! `park-venue` — the places visitors spend time.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`attraction`]  | `AttractionSpec`, `Attraction`, `CycleOutcome`                |
//! | [`activity`]    | `ActivitySpec`, `Activity`, `Visit`                           |
//! | [`history`]     | `History<T>`, `AttractionSample`, `ActivitySample`            |
//! | [`error`]       | `VenueError`, `VenueResult<T>`                                |
//!
//! # Attractions vs activities
//!
//! An attraction has a fixed per-cycle capacity and two FIFO queues sharing
//! it: standby and expedited.  Every `run_time` minutes the current riders
//! exit and the next batch boards, expedited first up to its seat ratio.
//!
//! An activity has no queue and no capacity.  Each visitor is admitted
//! immediately with a randomly drawn stay and leaves when it runs out.
//!
//! Neither kind ever calls the other or touches agent state; the engine
//! routes the returned agent ids.

pub mod activity;
pub mod attraction;
pub mod error;
pub mod history;


pub use activity::{Activity, ActivitySpec, Visit};
pub use attraction::{Attraction, AttractionSpec, CycleOutcome};
pub use error::{VenueError, VenueResult};
pub use history::{ActivitySample, AttractionSample, History};
