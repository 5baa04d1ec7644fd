use std::sync::Arc;

use tracing::warn;

use super::definition::ShopDefinition;
use crate::data::{ItemCatalog, ItemDefinition};
use crate::slot::ItemSlot;

// ============================================================================
// Shop System
// ============================================================================

/// A merchant's live state: stock slots, a gold balance and the two markup
/// rates applied when pricing a cart.
///
/// Stock slots differ from inventory slots in two ways: a shop keeps one
/// stack per item kind with no ceiling, and the slot list grows when it runs
/// out of room rather than refusing the item.
pub struct ShopSystem {
    slots: Vec<ItemSlot>,
    gold: i32,
    buy_markup: f32,
    sell_markup: f32,
}

impl ShopSystem {
    pub fn new(size: usize, gold: i32, buy_markup: f32, sell_markup: f32) -> Self {
        Self {
            slots: vec![ItemSlot::new(); size],
            gold,
            buy_markup,
            sell_markup,
        }
    }

    /// Build a shop from its data-file definition, resolving stock lines
    /// through the catalog. Lines naming an unknown item are skipped with a
    /// warning rather than failing the whole shop.
    pub fn from_definition(def: &ShopDefinition, catalog: &ItemCatalog) -> Self {
        let mut shop = Self::new(def.stock.len(), def.gold, def.buy_markup, def.sell_markup);

        for entry in &def.stock {
            match catalog.get(entry.item_id) {
                Some(item) => shop.add_stock(&item, entry.quantity),
                None => warn!(
                    "Shop '{}' stocks unknown item id {}, skipping",
                    def.id, entry.item_id
                ),
            }
        }

        shop
    }

    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn buy_markup(&self) -> f32 {
        self.buy_markup
    }

    pub fn sell_markup(&self) -> f32 {
        self.sell_markup
    }

    /// Add stock, stacking onto the item's existing slot if there is one.
    /// A full shop grows a new slot instead of rejecting the item.
    pub fn add_stock(&mut self, item: &Arc<ItemDefinition>, amount: i32) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.holds(item)) {
            slot.add_to_stack(amount);
            return;
        }

        match self.slots.iter_mut().find(|slot| slot.is_empty()) {
            Some(slot) => slot.assign(Arc::clone(item), amount),
            None => self.slots.push(ItemSlot::with_item(Arc::clone(item), amount)),
        }
    }

    /// Remove up to `amount` of `item` from stock, draining stacks in slot
    /// order. Like the inventory walk, over-removal just empties the stacks.
    pub fn remove_stock(&mut self, item: &ItemDefinition, amount: i32) {
        let mut remaining = amount;

        for slot in &mut self.slots {
            if remaining <= 0 {
                break;
            }
            if !slot.holds(item) {
                continue;
            }

            let drained = remaining.min(slot.quantity());
            slot.remove_from_stack(drained);
            remaining -= drained;
        }
    }

    /// Total stock of `item` across all slots.
    pub fn stock_of(&self, item: &ItemDefinition) -> i32 {
        self.slots
            .iter()
            .filter(|slot| slot.holds(item))
            .map(|slot| slot.quantity())
            .sum()
    }

    pub fn gain_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    pub fn spend_gold(&mut self, amount: i32) {
        self.gold -= amount;
    }
}
