//! `park-sim` — the minute-by-minute park engine.
//!
//! # Tick loop
//!
//! ```text
//! for minute in 0.. (until the schedule is exhausted and the park is empty):
//!   ① Arrivals   — release schedule[minute] agents in id order.
//!   ② Idle       — snapshot present, idling agents.
//!   ③ Decide     — BehaviorModel::decide for each, applied immediately:
//!                    Queue / GetPass → attraction queues and pass budget
//!                    Visit           → activity admission
//!                    Leave           → return held passes, exit
//!   ④ Attractions — step each in popularity order; route exits and
//!                   boardings (forcing boarders out of activities).
//!   ⑤ Activities  — step each; route exits.
//!   ⑥ Time        — pass one minute everywhere; record histories.
//!   ⑦ Count       — record present agents and pass totals.
//!   ⑧ Advance     — clock += 1.
//! ```
//!
//! Decisions are applied before any venue steps, so a visitor who queues at
//! minute `t` can board at `t`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs [`replicate`] on Rayon's thread pool.              |
//! | `serde`    | Derives `Serialize` on [`ParkSummary`] and its parts.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use park_behavior::ParkBehavior;
//! use park_sim::{NoopObserver, ParkBuilder};
//!
//! let mut engine = ParkBuilder::new(config, ParkBehavior::default())
//!     .hourly(hourly)
//!     .attractions(attractions)
//!     .activities(activities)
//!     .mix(mix)
//!     .build()?;
//! engine.run(&mut NoopObserver);
//! let summary = engine.summary();
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod history;
pub mod observer;
pub mod replicate;
pub mod summary;


pub use builder::ParkBuilder;
pub use engine::{MinuteStats, ParkEngine};
pub use error::{SimError, SimResult};
pub use history::{ParkHistory, ParkSample};
pub use observer::{NoopObserver, ParkObserver, ParkView};
pub use replicate::replicate;
pub use summary::{ActivitySummary, ArchetypeSummary, AttractionSummary, ParkSummary};
