//! Inventory storage and the read-only view consumed by conditions.
//!
//! Conditions never mutate inventories; the mutators here exist so that
//! registries and tests can build state. Absence of an entry is a valid
//! zero-quantity result, never an error.

use std::collections::BTreeMap;

/// Per-item inventory record.
///
/// The record may grow additional fields (durability, bind state, ...);
/// conditions only read `quantity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntry {
    pub quantity: u32,
}

impl ItemEntry {
    pub const fn new(quantity: u32) -> Self {
        Self { quantity }
    }
}

/// Read-only inventory access consumed by condition evaluation.
///
/// Object-safe so registries can hand out `&dyn InventoryView` without
/// exposing their storage.
pub trait InventoryView {
    /// Returns the held quantity of `item_id`, or 0 if there is no entry.
    fn quantity_of(&self, item_id: &str) -> u32;
}

/// Mapping from item identifier to its inventory record.
///
/// Backed by an ordered map so iteration (and any serialized form) is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    entries: BTreeMap<String, ItemEntry>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for `item_id`, replacing any previous record.
    pub fn set(&mut self, item_id: impl Into<String>, quantity: u32) {
        self.entries.insert(item_id.into(), ItemEntry::new(quantity));
    }

    /// Adds `quantity` to the entry for `item_id`, creating it if absent.
    pub fn add(&mut self, item_id: impl Into<String>, quantity: u32) {
        let entry = self
            .entries
            .entry(item_id.into())
            .or_insert(ItemEntry::new(0));
        entry.quantity = entry.quantity.saturating_add(quantity);
    }

    /// Removes the entry for `item_id`, returning its record if present.
    pub fn remove(&mut self, item_id: &str) -> Option<ItemEntry> {
        self.entries.remove(item_id)
    }

    /// Returns the record for `item_id`, if any.
    pub fn entry(&self, item_id: &str) -> Option<&ItemEntry> {
        self.entries.get(item_id)
    }

    /// Returns true if the inventory holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in item-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}

impl InventoryView for Inventory {
    fn quantity_of(&self, item_id: &str) -> u32 {
        self.entries
            .get(item_id)
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entry_reads_as_zero() {
        let inventory = Inventory::new();
        assert_eq!(inventory.quantity_of("item_potion"), 0);
        assert!(inventory.entry("item_potion").is_none());
    }

    #[test]
    fn set_and_read_back() {
        let mut inventory = Inventory::new();
        inventory.set("item_cherry", 5);
        assert_eq!(inventory.quantity_of("item_cherry"), 5);
        assert_eq!(inventory.entry("item_cherry"), Some(&ItemEntry::new(5)));
    }

    #[test]
    fn add_accumulates_and_saturates() {
        let mut inventory = Inventory::new();
        inventory.add("item_cherry", 3);
        inventory.add("item_cherry", 2);
        assert_eq!(inventory.quantity_of("item_cherry"), 5);

        inventory.set("item_gold", u32::MAX);
        inventory.add("item_gold", 1);
        assert_eq!(inventory.quantity_of("item_gold"), u32::MAX);
    }

    #[test]
    fn remove_clears_entry() {
        let mut inventory = Inventory::new();
        inventory.set("item_map", 1);
        assert_eq!(inventory.remove("item_map"), Some(ItemEntry::new(1)));
        assert_eq!(inventory.quantity_of("item_map"), 0);
        assert!(inventory.is_empty());
    }

    #[test]
    fn iteration_is_ordered_by_item_id() {
        let mut inventory = Inventory::new();
        inventory.set("item_b", 2);
        inventory.set("item_a", 1);
        inventory.set("item_c", 3);
        let ids: Vec<&str> = inventory.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["item_a", "item_b", "item_c"]);
    }
}
