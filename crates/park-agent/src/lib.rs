//! `park-agent` — visitors and the profiles that drive them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`profile`]     | `AgeClass`, `BehaviorProfile`                                  |
//! | [`archetype`]   | `ArchetypeParams`, `ArchetypeTable`, `ArchetypeShare`, `ArchetypeMix` |
//! | [`agent`]       | `Agent`, `Action`, `Location`, `HeldPass`, `HeldPasses`, `LogEntry` |
//! | [`builder`]     | `PopulationBuilder` (profiles + decision streams in one step)  |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                                 |
//!
//! # State machine
//!
//! ```text
//! NotArrived ─arrive─▶ Idling ─┬─▶ Queueing ─board─▶ Riding ─exit─▶ Idling
//!                              ├─▶ Browsing ─exit/force─────────▶ Idling
//!                              ├─▶ GettingPass ─return time─────▶ Idling
//!                              └─▶ Leaving (terminal)
//! ```
//!
//! Only idling agents are asked for a decision.  Every other transition is
//! driven by the engine in response to an attraction or activity event.

pub mod agent;
pub mod archetype;
pub mod builder;
pub mod error;
pub mod profile;

#[cfg(test)]
mod tests;

pub use agent::{Action, Agent, HeldPass, HeldPasses, Location, LogEntry};
pub use archetype::{ArchetypeMix, ArchetypeParams, ArchetypeShare, ArchetypeTable};
pub use builder::PopulationBuilder;
pub use error::{AgentError, AgentResult};
pub use profile::{AgeClass, BehaviorProfile};
