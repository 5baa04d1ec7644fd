use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::ItemCatalog;
use crate::inventory::Inventory;
use crate::slot::{EMPTY_QUANTITY, ItemSlot};

// ============================================================================
// Save Records
// ============================================================================
//
// The core never touches disk. It hands these plain records to an external
// save mechanism and rebuilds containers from them on load. Restoring is a
// two-phase affair: deserialize records first, then resolve item ids through
// the catalog in a separate pass.

/// One slot as persisted: the item's stable catalog id and the stack size.
/// An empty slot is stored as `{ -1, -1 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub item_id: i32,
    pub quantity: i32,
}

/// Snapshot of one container, keyed externally by its stable identifier.
/// Position and rotation are only present for world-placed containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub slots: Vec<SlotRecord>,
    pub gold: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f32; 4]>,
}

/// Everything the save collaborator persists for a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveData {
    pub player_inventory: Option<ContainerRecord>,
    pub chests: HashMap<String, ContainerRecord>,
}

impl ContainerRecord {
    /// Snapshot a container's slots and gold.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let slots = inventory
            .slots()
            .iter()
            .map(|slot| match slot.item() {
                Some(item) => SlotRecord {
                    item_id: item.id,
                    quantity: slot.quantity(),
                },
                None => SlotRecord {
                    item_id: -1,
                    quantity: EMPTY_QUANTITY,
                },
            })
            .collect();

        Self {
            slots,
            gold: inventory.gold(),
            position: None,
            rotation: None,
        }
    }

    pub fn with_transform(mut self, position: [f32; 3], rotation: [f32; 4]) -> Self {
        self.position = Some(position);
        self.rotation = Some(rotation);
        self
    }

    /// Rebuild a container, resolving item ids through the catalog. A record
    /// naming an id the catalog no longer knows restores as an empty slot —
    /// stale data degrades, it does not crash the load.
    pub fn restore(&self, catalog: &ItemCatalog) -> Inventory {
        let slots = self
            .slots
            .iter()
            .map(|record| {
                if record.item_id < 0 {
                    return ItemSlot::new();
                }
                match catalog.get(record.item_id) {
                    Some(item) => ItemSlot::with_item(item, record.quantity),
                    None => {
                        warn!("Unknown item id {} in save record, dropping slot", record.item_id);
                        ItemSlot::new()
                    }
                }
            })
            .collect();

        Inventory::from_parts(slots, self.gold)
    }
}
