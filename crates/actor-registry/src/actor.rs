//! Actor records owned by the in-memory registry.

use condition_core::Inventory;

/// An actor (player or NPC) owning an inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    /// Reference the actor is resolved by: `"player"` or an NPC slug.
    pub slug: String,
    pub inventory: Inventory,
}

impl Actor {
    /// Creates an actor with an empty inventory.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            inventory: Inventory::new(),
        }
    }

    /// Adds an inventory entry (builder pattern).
    #[must_use]
    pub fn with_item(mut self, item_id: impl Into<String>, quantity: u32) -> Self {
        self.inventory.set(item_id, quantity);
        self
    }
}
