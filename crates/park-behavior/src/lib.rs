//! `park-behavior` — what an idle visitor does next.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`decision`] | `Decision` enum (`Leave`, `Queue`, `GetPass`, `Visit`, `Wait`) |
//! | [`context`]  | `DecisionContext<'a>` — read-only park view for one minute  |
//! | [`model`]    | `BehaviorModel` trait                                       |
//! | [`park`]     | `ParkBehavior` — the stock decision tree                    |
//!
//! # Design notes
//!
//! A model only reads.  It returns a [`Decision`] and the engine applies it
//! to the agent and the chosen venue, so models never hold `&mut` access to
//! shared park state.

pub mod context;
pub mod decision;
pub mod model;
pub mod park;


pub use context::DecisionContext;
pub use decision::Decision;
pub use model::BehaviorModel;
pub use park::ParkBehavior;
