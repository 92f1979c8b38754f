//! Actor resolution boundary.
//!
//! Resolution is an external collaborator concern: conditions receive a
//! registry handle per evaluation instead of reaching into ambient game
//! state. The library ships a reference implementation in the
//! `actor-registry` crate.

use crate::inventory::InventoryView;

/// Distinguished actor reference naming the player.
pub const PLAYER_REF: &str = "player";

/// Resolves actor references to inventory owners.
///
/// An actor reference is either [`PLAYER_REF`] or an NPC slug such as
/// `"npc_maple"`; which references are known is entirely up to the
/// implementation. `None` means the reference names no known actor, which
/// evaluation reports as [`ConditionError::ActorNotFound`].
///
/// [`ConditionError::ActorNotFound`]: crate::ConditionError::ActorNotFound
pub trait ActorRegistry {
    /// Returns the inventory view of the actor named by `actor_ref`.
    fn resolve(&self, actor_ref: &str) -> Option<&dyn InventoryView>;
}
