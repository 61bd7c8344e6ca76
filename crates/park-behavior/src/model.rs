//! The `BehaviorModel` trait — the extension point for visitor behavior.

use park_agent::Agent;
use park_core::AgentRng;

use crate::{Decision, DecisionContext};

/// Pluggable visitor behavior.
///
/// Called once per idle visitor per minute.  `rng` is the visitor's own
/// persistent stream, so decisions are reproducible regardless of how many
/// other visitors decided before it.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysShop;
///
/// impl BehaviorModel for AlwaysShop {
///     fn decide(&self, _: &Agent, ctx: &DecisionContext<'_>, _: &mut AgentRng) -> Decision {
///         match ctx.activities.first() {
///             Some(activity) => Decision::Visit(activity.id()),
///             None => Decision::Wait,
///         }
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    fn decide(
        &self,
        agent: &Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Decision;
}
