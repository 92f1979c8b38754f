//! In-memory ActorRegistry implementation for tests and local runs.

use std::collections::HashMap;

use condition_core::{ActorRegistry, InventoryView, PLAYER_REF};

use crate::actor::Actor;

/// In-memory implementation of [`ActorRegistry`].
///
/// Holds the distinguished player actor plus NPCs indexed by slug. The
/// reference `"player"` always resolves to the player; any other reference
/// is looked up among the NPCs.
pub struct InMemoryActorRegistry {
    player: Actor,
    npcs: HashMap<String, Actor>,
}

impl InMemoryActorRegistry {
    /// Creates a registry with an empty-handed player and no NPCs.
    pub fn new() -> Self {
        Self {
            player: Actor::new(PLAYER_REF),
            npcs: HashMap::new(),
        }
    }

    /// Gives the player an inventory entry (builder pattern).
    #[must_use]
    pub fn with_player_item(mut self, item_id: impl Into<String>, quantity: u32) -> Self {
        self.player.inventory.set(item_id, quantity);
        self
    }

    /// Registers an NPC under its slug (builder pattern).
    ///
    /// Re-registering a slug replaces the previous actor.
    #[must_use]
    pub fn with_npc(mut self, npc: Actor) -> Self {
        self.npcs.insert(npc.slug.clone(), npc);
        self
    }

    /// Returns the player actor.
    pub fn player(&self) -> &Actor {
        &self.player
    }

    /// Returns a mutable handle to the player actor.
    pub fn player_mut(&mut self) -> &mut Actor {
        &mut self.player
    }

    /// Returns the NPC registered under `slug`, if any.
    pub fn npc(&self, slug: &str) -> Option<&Actor> {
        self.npcs.get(slug)
    }

    /// Returns a mutable handle to the NPC registered under `slug`, if any.
    pub fn npc_mut(&mut self, slug: &str) -> Option<&mut Actor> {
        self.npcs.get_mut(slug)
    }

    /// Removes the NPC registered under `slug`, returning it if present.
    pub fn remove_npc(&mut self, slug: &str) -> Option<Actor> {
        self.npcs.remove(slug)
    }
}

impl Default for InMemoryActorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorRegistry for InMemoryActorRegistry {
    fn resolve(&self, actor_ref: &str) -> Option<&dyn InventoryView> {
        if actor_ref == PLAYER_REF {
            tracing::trace!("resolved '{actor_ref}' to player actor");
            return Some(&self.player.inventory);
        }
        match self.npcs.get(actor_ref) {
            Some(npc) => {
                tracing::trace!("resolved '{actor_ref}' to NPC actor");
                Some(&npc.inventory)
            }
            None => {
                tracing::debug!("actor reference '{actor_ref}' names no known actor");
                None
            }
        }
    }
}
