use std::sync::Arc;

use crate::data::ItemDefinition;
use crate::inventory::Inventory;
use crate::slot::ItemSlot;

// ============================================================================
// Player Inventory
// ============================================================================

/// The player's container: one slot list segmented into a hotbar region and
/// a backpack region by a starting offset. Both regions share the same
/// underlying slots, so index-order placement naturally fills the hotbar
/// first.
pub struct PlayerInventory {
    inventory: Inventory,
    hotbar_size: usize,
}

impl PlayerInventory {
    pub fn new(hotbar_size: usize, backpack_size: usize) -> Self {
        Self {
            inventory: Inventory::new(hotbar_size + backpack_size),
            hotbar_size,
        }
    }

    pub fn from_inventory(inventory: Inventory, hotbar_size: usize) -> Self {
        Self {
            inventory,
            hotbar_size,
        }
    }

    /// Index where the backpack view begins.
    pub fn backpack_offset(&self) -> usize {
        self.hotbar_size
    }

    pub fn hotbar_slots(&self) -> &[ItemSlot] {
        &self.inventory.slots()[..self.hotbar_size]
    }

    pub fn backpack_slots(&self) -> &[ItemSlot] {
        &self.inventory.slots()[self.hotbar_size..]
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn add_item(&mut self, item: &Arc<ItemDefinition>, amount: i32) -> bool {
        self.inventory.add_item(item, amount)
    }

    pub fn gold(&self) -> i32 {
        self.inventory.gold()
    }
}
