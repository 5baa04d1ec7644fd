use std::sync::Arc;

use crate::data::ItemDefinition;

/// Sentinel quantity for a cleared slot, kept distinct from an occupied
/// stack of zero so save records preserve the cleared state faithfully.
pub const EMPTY_QUANTITY: i32 = -1;

// ============================================================================
// Item Slot
// ============================================================================

/// One storage cell: at most one item kind plus a stack quantity.
///
/// The same type backs inventory slots, shop stock slots and the cursor's
/// held buffer. A slot is logically empty whenever `item` is `None`,
/// regardless of what `quantity` says.
///
/// Stack ceilings are a caller contract: `assign` and `add_to_stack` do not
/// check `max_stack` themselves — callers are expected to ask `has_room`
/// first. Containers and the transaction engine do exactly that.
#[derive(Debug, Clone)]
pub struct ItemSlot {
    item: Option<Arc<ItemDefinition>>,
    quantity: i32,
}

impl ItemSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            item: None,
            quantity: EMPTY_QUANTITY,
        }
    }

    /// Create a slot already holding `quantity` of `item`.
    pub fn with_item(item: Arc<ItemDefinition>, quantity: i32) -> Self {
        Self {
            item: Some(item),
            quantity,
        }
    }

    pub fn item(&self) -> Option<&Arc<ItemDefinition>> {
        self.item.as_ref()
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// True if the slot holds this item kind (identity is the catalog id).
    pub fn holds(&self, item: &ItemDefinition) -> bool {
        self.item.as_ref().is_some_and(|held| held.id == item.id)
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.item = None;
        self.quantity = EMPTY_QUANTITY;
    }

    /// Put `amount` of `item` into the slot. If the slot already holds the
    /// same item kind the amount stacks on top; otherwise the previous
    /// contents are replaced outright.
    pub fn assign(&mut self, item: Arc<ItemDefinition>, amount: i32) {
        if self.holds(&item) {
            self.add_to_stack(amount);
        } else {
            self.item = Some(item);
            self.quantity = amount;
        }
    }

    /// Whether `amount_to_add` more units would fit under the stack ceiling.
    /// An empty slot always has room; it is unbounded until assigned.
    pub fn has_room(&self, amount_to_add: i32) -> bool {
        match &self.item {
            Some(item) => self.quantity + amount_to_add <= item.max_stack,
            None => true,
        }
    }

    /// Units still addable before the ceiling, `None` for an empty slot.
    pub fn room_left(&self) -> Option<i32> {
        self.item.as_ref().map(|item| item.max_stack - self.quantity)
    }

    pub fn add_to_stack(&mut self, amount: i32) {
        self.quantity += amount;
    }

    /// Remove `amount` units. Driving the stack to zero or below clears the
    /// slot; over-removal is not rejected.
    pub fn remove_from_stack(&mut self, amount: i32) {
        self.quantity -= amount;
        if self.quantity <= 0 {
            self.clear();
        }
    }

    /// Split off half the stack (rounded up) into a fresh slot. Fails on a
    /// stack of one or on an empty slot, leaving this slot untouched.
    pub fn split(&mut self) -> Option<ItemSlot> {
        if self.quantity <= 1 {
            return None;
        }

        let item = self.item.as_ref()?.clone();
        let half = (self.quantity + 1) / 2;
        self.remove_from_stack(half);

        Some(ItemSlot::with_item(item, half))
    }

    /// Move the entire contents out, leaving this slot empty.
    pub fn take(&mut self) -> ItemSlot {
        let taken = self.clone();
        self.clear();
        taken
    }
}

impl Default for ItemSlot {
    fn default() -> Self {
        Self::new()
    }
}
