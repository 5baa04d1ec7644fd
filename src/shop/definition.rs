//! Shop Definition Structures
//!
//! Data-file shapes for a merchant's stock, gold float and markup rates.

use serde::{Deserialize, Serialize};

/// A shop as described by its TOML data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopDefinition {
    pub id: String,
    pub display_name: String,
    /// Opening gold balance; the shop cannot pay out more than it holds.
    pub gold: i32,
    /// Signed fraction added to the base price when the player buys.
    pub buy_markup: f32,
    /// Signed fraction applied when the player sells (usually negative).
    pub sell_markup: f32,
    #[serde(default)]
    pub stock: Vec<ShopStockEntry>,
}

/// One stocked line: a catalog item id and how many the shop opens with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopStockEntry {
    pub item_id: i32,
    pub quantity: i32,
}
