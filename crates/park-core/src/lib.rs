//! `park-core` — foundational types for the park simulation.
//!
//! This crate is a dependency of every other `park-*` crate.  It has no
//! `park-*` dependencies and minimal external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `AttractionId`, `ActivityId`               |
//! | [`time`]        | `Minute`, `ParkClock`                                 |
//! | [`config`]      | `ParkConfig`, `ExpeditedPolicy`                       |
//! | [`rng`]         | `SeedStream`, `DrawRng` (one-shot), `AgentRng` (persistent) |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DAY_MINUTES, ExpeditedPolicy, ParkConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{ActivityId, AgentId, AttractionId};
pub use rng::{AgentRng, DrawRng, SeedStream};
pub use time::{Minute, ParkClock};
