use std::sync::Arc;

use crate::data::ItemDefinition;

// ============================================================================
// Pricing
// ============================================================================

/// Price of `amount` units of `item` under a signed markup fraction, floored
/// to whole gold.
///
/// The cart calls this once per add/remove at a quantity of 1, so a basket
/// total is always the sum of per-unit floors — never a single floor over the
/// batch. A unit price of 10 at markup 0.2 is 12, and three of them are 36
/// regardless of how the lines are grouped.
pub fn modified_price(item: &ItemDefinition, amount: i32, markup: f32) -> i32 {
    let base_value = (item.gold_value * amount) as f32;
    (base_value + base_value * markup).floor() as i32
}

// ============================================================================
// Shopping Cart
// ============================================================================

/// One pending line: an item kind and how many units are in the basket.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub item: Arc<ItemDefinition>,
    pub quantity: i32,
}

/// The set of line items accumulated before a transaction is confirmed.
///
/// Lines are unique per item kind and keep insertion order for presentation.
/// The running total is adjusted incrementally on every add/remove and is
/// discarded with the cart when the shop window closes.
pub struct Cart {
    lines: Vec<CartLine>,
    total: i32,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            total: 0,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, item: &ItemDefinition) -> i32 {
        self.lines
            .iter()
            .find(|line| line.item.id == item.id)
            .map_or(0, |line| line.quantity)
    }

    /// Add one unit of `item` at the given unit price.
    pub fn add(&mut self, item: &Arc<ItemDefinition>, unit_price: i32) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: Arc::clone(item),
                quantity: 1,
            }),
        }
        self.total += unit_price;
    }

    /// Remove one unit of `item` at the given unit price, dropping the line
    /// entirely when it reaches zero. Removing an item that is not in the
    /// cart is a no-op.
    pub fn remove(&mut self, item: &ItemDefinition, unit_price: i32) {
        let Some(position) = self.lines.iter().position(|line| line.item.id == item.id) else {
            return;
        };

        self.lines[position].quantity -= 1;
        if self.lines[position].quantity <= 0 {
            self.lines.remove(position);
        }
        self.total -= unit_price;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.total = 0;
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
