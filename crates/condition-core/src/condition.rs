//! Condition plugin seam and the inventory quantity check.
//!
//! An [`EventCondition`] is a boolean-valued predicate a rules engine
//! evaluates to gate scripted behavior. Conditions are interchangeable: the
//! engine selects one by name and hands it raw rule tokens plus a registry
//! handle. Conditions read state and report; they never mutate it.

use crate::error::ConditionError;
use crate::params::CheckRequest;
use crate::registry::ActorRegistry;

/// A named predicate evaluated against raw script-rule parameters.
pub trait EventCondition: Send + Sync {
    /// Stable name the rule engine uses to select this condition.
    fn name(&self) -> &'static str;

    /// Evaluates this condition.
    ///
    /// # Arguments
    ///
    /// * `registry` - Resolves actor references to inventory owners.
    /// * `parameters` - Raw positional tokens from the script rule.
    ///
    /// # Returns
    ///
    /// `Ok(bool)` with the predicate outcome, or a [`ConditionError`] for
    /// malformed parameters or an unknown actor. Whether a failed condition
    /// counts as `false` or aborts the script is the caller's policy.
    fn test(
        &self,
        registry: &dyn ActorRegistry,
        parameters: &[&str],
    ) -> Result<bool, ConditionError>;
}

/// Checks whether an actor's inventory holds a quantity of an item.
///
/// ```text
/// has_item [npc or player] [item id] [operator] [quantity]
/// ```
///
/// * npc or player: `"player"` or an NPC slug, e.g. `"npc_maple"`
/// * item id: the item identifier, e.g. `"item_cherry"`
/// * operator: `less_than`, `greater_than`, or `equals` (optional,
///   defaults to `greater_than`)
/// * quantity: non-negative integer (optional, defaults to 0)
///
/// With both tail parameters omitted the rule reads "does the actor hold the
/// item at all" (`quantity > 0`).
#[derive(Clone, Copy, Debug, Default)]
pub struct HasItemCondition;

impl HasItemCondition {
    pub const NAME: &'static str = "has_item";

    /// Evaluates an already-parsed request against the registry.
    pub fn check(
        registry: &dyn ActorRegistry,
        request: &CheckRequest,
    ) -> Result<bool, ConditionError> {
        let actor = registry
            .resolve(&request.actor_ref)
            .ok_or_else(|| ConditionError::ActorNotFound(request.actor_ref.clone()))?;
        let observed = actor.quantity_of(&request.item_id);
        Ok(request.op.compare(observed, request.quantity))
    }
}

impl EventCondition for HasItemCondition {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn test(
        &self,
        registry: &dyn ActorRegistry,
        parameters: &[&str],
    ) -> Result<bool, ConditionError> {
        let request = CheckRequest::parse(parameters)?;
        Self::check(registry, &request)
    }
}

/// Evaluates an inventory check from raw rule tokens.
///
/// Convenience entry point equivalent to
/// `HasItemCondition.test(registry, parameters)`.
pub fn evaluate(
    registry: &dyn ActorRegistry,
    parameters: &[&str],
) -> Result<bool, ConditionError> {
    HasItemCondition.test(registry, parameters)
}
