use crate::slot::ItemSlot;

// ============================================================================
// Cursor Slot (held item)
// ============================================================================

/// The single transient slot a user "holds" while moving items around.
///
/// Every slot-to-slot transfer goes through here: the UI reports which slot
/// was clicked and `slot_clicked` works out whether that means pick up,
/// place, merge, or swap. One session has one cursor, so only one transfer
/// is ever in flight.
pub struct CursorSlot {
    held: ItemSlot,
}

impl CursorSlot {
    pub fn new() -> Self {
        Self {
            held: ItemSlot::new(),
        }
    }

    pub fn held(&self) -> &ItemSlot {
        &self.held
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Drop whatever is held. The contents are gone; callers that want to
    /// return the item to a container do that before clearing.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// The click protocol. `split_request` is the modifier (shift-click)
    /// asking to pick up only half a stack.
    ///
    /// No quantity is ever created or lost here: every branch moves whole
    /// units between `clicked` and the held buffer.
    pub fn slot_clicked(&mut self, clicked: &mut ItemSlot, split_request: bool) {
        // Pick up: clicked has an item, hand is empty.
        if !clicked.is_empty() && self.held.is_empty() {
            if split_request {
                if let Some(half) = clicked.split() {
                    self.held = half;
                    return;
                }
                // Single unit: fall through to a full pickup.
            }
            self.held = clicked.take();
            return;
        }

        // Place: clicked is empty, hand has an item.
        if clicked.is_empty() && !self.held.is_empty() {
            let held = self.held.take();
            if let Some(item) = held.item() {
                clicked.assign(item.clone(), held.quantity());
            }
            return;
        }

        let (Some(clicked_item), Some(held_item)) = (clicked.item(), self.held.item()) else {
            return; // Both empty: nothing to do.
        };

        // Different item kinds always swap outright.
        if clicked_item.id != held_item.id {
            std::mem::swap(&mut self.held, clicked);
            return;
        }

        // Same item kind: merge as much as fits.
        let held_quantity = self.held.quantity();
        if clicked.has_room(held_quantity) {
            clicked.add_to_stack(held_quantity);
            self.held.clear();
            return;
        }

        let room = clicked.room_left().unwrap_or(0);
        if room == 0 {
            // Full stack clicked: treat it like a swap of equals.
            std::mem::swap(&mut self.held, clicked);
            return;
        }

        // Partial merge: top the clicked stack off and rebuild the held
        // slot fresh so it never aliases a container slot.
        let item = held_item.clone();
        clicked.add_to_stack(room);
        self.held = ItemSlot::with_item(item, held_quantity - room);
    }
}

impl Default for CursorSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemDefinition;
    use std::sync::Arc;

    fn item(id: i32, max_stack: i32) -> Arc<ItemDefinition> {
        Arc::new(ItemDefinition {
            id,
            display_name: format!("item {}", id),
            description: String::new(),
            icon: format!("item_{}", id),
            max_stack,
            gold_value: 1,
        })
    }

    #[test]
    fn test_pick_up_and_place() {
        let potion = item(0, 10);
        let mut cursor = CursorSlot::new();
        let mut source = ItemSlot::with_item(Arc::clone(&potion), 6);
        let mut target = ItemSlot::new();

        cursor.slot_clicked(&mut source, false);
        assert!(source.is_empty());
        assert_eq!(cursor.held().quantity(), 6);

        cursor.slot_clicked(&mut target, false);
        assert!(cursor.is_empty());
        assert!(target.holds(&potion));
        assert_eq!(target.quantity(), 6);
    }

    #[test]
    fn test_split_pickup_takes_half() {
        let potion = item(0, 10);
        let mut cursor = CursorSlot::new();
        let mut source = ItemSlot::with_item(potion, 7);

        cursor.slot_clicked(&mut source, true);
        assert_eq!(cursor.held().quantity(), 4);
        assert_eq!(source.quantity(), 3);
    }

    #[test]
    fn test_split_pickup_falls_back_on_single_unit() {
        let potion = item(0, 10);
        let mut cursor = CursorSlot::new();
        let mut source = ItemSlot::with_item(potion, 1);

        cursor.slot_clicked(&mut source, true);
        assert_eq!(cursor.held().quantity(), 1);
        assert!(source.is_empty());
    }

    #[test]
    fn test_full_merge_same_item() {
        let potion = item(0, 10);
        let mut cursor = CursorSlot::new();
        let mut held_source = ItemSlot::with_item(Arc::clone(&potion), 3);
        let mut clicked = ItemSlot::with_item(Arc::clone(&potion), 5);

        cursor.slot_clicked(&mut held_source, false);
        cursor.slot_clicked(&mut clicked, false);

        assert_eq!(clicked.quantity(), 8);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_partial_merge_conserves_total() {
        let potion = item(0, 10);
        let mut cursor = CursorSlot::new();
        let mut held_source = ItemSlot::with_item(Arc::clone(&potion), 6);
        let mut clicked = ItemSlot::with_item(Arc::clone(&potion), 8);

        cursor.slot_clicked(&mut held_source, false);
        cursor.slot_clicked(&mut clicked, false);

        assert_eq!(clicked.quantity(), 10);
        assert_eq!(cursor.held().quantity(), 4);
        assert_eq!(clicked.quantity() + cursor.held().quantity(), 14);
    }

    #[test]
    fn test_full_stack_swaps() {
        let potion = item(0, 10);
        let mut cursor = CursorSlot::new();
        let mut held_source = ItemSlot::with_item(Arc::clone(&potion), 4);
        let mut clicked = ItemSlot::with_item(Arc::clone(&potion), 10);

        cursor.slot_clicked(&mut held_source, false);
        cursor.slot_clicked(&mut clicked, false);

        assert_eq!(clicked.quantity(), 4);
        assert_eq!(cursor.held().quantity(), 10);
    }

    #[test]
    fn test_different_items_swap() {
        let potion = item(0, 10);
        let sword = item(1, 1);
        let mut cursor = CursorSlot::new();
        let mut held_source = ItemSlot::with_item(Arc::clone(&sword), 1);
        let mut clicked = ItemSlot::with_item(Arc::clone(&potion), 9);

        cursor.slot_clicked(&mut held_source, false);
        cursor.slot_clicked(&mut clicked, false);

        assert!(clicked.holds(&sword));
        assert_eq!(clicked.quantity(), 1);
        assert!(cursor.held().holds(&potion));
        assert_eq!(cursor.held().quantity(), 9);
    }
}
