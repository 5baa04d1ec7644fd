use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::cursor::CursorSlot;
use crate::data::ItemDefinition;
use crate::slot::ItemSlot;

// ============================================================================
// Change Notifications
// ============================================================================

/// Raised by a container whenever its observable state changes. The
/// presentation layer subscribes to re-render; nothing in the core reacts
/// to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryEvent {
    SlotChanged { index: usize },
    GoldChanged { gold: i32 },
}

// ============================================================================
// Inventory
// ============================================================================

/// A fixed-size ordered list of slots plus a gold balance.
///
/// Slot order matters: item placement and removal both walk the slots in
/// index order, so index 0 is always the first candidate.
///
/// Gold is deliberately unclamped here — `spend_gold` will happily go
/// negative. The transaction engine pre-validates every shop flow, and any
/// other caller owns its own floor check.
pub struct Inventory {
    slots: Vec<ItemSlot>,
    gold: i32,
    listeners: Vec<Sender<InventoryEvent>>,
}

/// Place `amount` of `item` into a slot list: first existing stack with room
/// for the whole amount wins, then the first empty slot. Returns the index
/// used, or `None` when nothing could take it. All-or-nothing — the amount is
/// never spread across slots.
fn place(slots: &mut [ItemSlot], item: &Arc<ItemDefinition>, amount: i32) -> Option<usize> {
    for (index, slot) in slots.iter_mut().enumerate() {
        if slot.holds(item) && slot.has_room(amount) {
            slot.add_to_stack(amount);
            return Some(index);
        }
    }

    for (index, slot) in slots.iter_mut().enumerate() {
        if slot.is_empty() {
            slot.assign(Arc::clone(item), amount);
            return Some(index);
        }
    }

    None
}

impl Inventory {
    /// Create an inventory with `size` empty slots and no gold.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![ItemSlot::new(); size],
            gold: 0,
            listeners: Vec::new(),
        }
    }

    /// Rebuild an inventory from already-resolved slots, e.g. from a save
    /// record after the catalog pass.
    pub fn from_parts(slots: Vec<ItemSlot>, gold: i32) -> Self {
        Self {
            slots,
            gold,
            listeners: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> &ItemSlot {
        &self.slots[index]
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Add `amount` of `item` into the first slot that can hold all of it.
    /// Returns false (state unchanged) when no existing stack has room and
    /// no slot is free.
    pub fn add_item(&mut self, item: &Arc<ItemDefinition>, amount: i32) -> bool {
        match place(&mut self.slots, item, amount) {
            Some(index) => {
                self.notify(InventoryEvent::SlotChanged { index });
                true
            }
            None => false,
        }
    }

    /// Remove up to `amount` of `item`, draining matching stacks in index
    /// order. Holding less than `amount` is not an error — the walk simply
    /// runs out; callers who care must check `total_of` first.
    pub fn remove_item(&mut self, item: &ItemDefinition, amount: i32) {
        let mut remaining = amount;

        for index in 0..self.slots.len() {
            if remaining <= 0 {
                break;
            }
            let slot = &mut self.slots[index];
            if !slot.holds(item) {
                continue;
            }

            let drained = remaining.min(slot.quantity());
            slot.remove_from_stack(drained);
            remaining -= drained;
            self.notify(InventoryEvent::SlotChanged { index });
        }
    }

    /// Index of the first empty slot, if any.
    pub fn has_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_empty())
    }

    /// Indices of every occupied slot holding `item`, in slot order.
    pub fn find_all(&self, item: &ItemDefinition) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.holds(item))
            .map(|(index, _)| index)
            .collect()
    }

    /// Total quantity of `item` held across all slots.
    pub fn total_of(&self, item: &ItemDefinition) -> i32 {
        self.slots
            .iter()
            .filter(|slot| slot.holds(item))
            .map(|slot| slot.quantity())
            .sum()
    }

    /// Non-destructive capacity check: would every unit of every request fit?
    ///
    /// Works on a scratch copy of the slots and places the batch one unit at
    /// a time, so partially-full stacks and empty slots are both consumed the
    /// way a real unit-by-unit add would consume them.
    pub fn simulate_add_batch<'a, I>(&self, requests: I) -> bool
    where
        I: IntoIterator<Item = (&'a Arc<ItemDefinition>, i32)>,
    {
        let mut scratch = self.slots.clone();

        for (item, count) in requests {
            for _ in 0..count {
                if place(&mut scratch, item, 1).is_none() {
                    return false;
                }
            }
        }

        true
    }

    pub fn gain_gold(&mut self, amount: i32) {
        self.gold += amount;
        self.notify(InventoryEvent::GoldChanged { gold: self.gold });
    }

    pub fn spend_gold(&mut self, amount: i32) {
        self.gold -= amount;
        self.notify(InventoryEvent::GoldChanged { gold: self.gold });
    }

    /// Run the cursor click protocol against the slot at `index`, then raise
    /// a change notification for it.
    pub fn slot_clicked(&mut self, index: usize, cursor: &mut CursorSlot, split_request: bool) {
        cursor.slot_clicked(&mut self.slots[index], split_request);
        self.notify(InventoryEvent::SlotChanged { index });
    }

    /// Subscribe to change notifications. Dropping the receiver ends the
    /// subscription; dead subscribers are pruned on the next notify.
    pub fn subscribe(&mut self) -> Receiver<InventoryEvent> {
        let (tx, rx) = channel();
        self.listeners.push(tx);
        rx
    }

    fn notify(&mut self, event: InventoryEvent) {
        self.listeners.retain(|tx| tx.send(event).is_ok());
    }
}
