//! Item and economy core: slot-based containers shared by the player,
//! chests and merchants, the cursor-mediated transfer protocol, and the
//! shop cart/transaction engine.
//!
//! Everything here is synchronous and single-threaded: mutations happen in
//! response to discrete UI events, one at a time. Rendering, input and save
//! file I/O live outside this crate; the core exposes operations and plain
//! serde records at those boundaries.

pub mod cursor;
pub mod data;
pub mod inventory;
pub mod player;
pub mod save;
pub mod shop;
pub mod slot;
pub mod uid;

pub use cursor::CursorSlot;
pub use data::{ItemCatalog, ItemDefinition};
pub use inventory::{Inventory, InventoryEvent};
pub use player::PlayerInventory;
pub use save::{ContainerRecord, SaveData, SlotRecord};
pub use shop::{
    Cart, ShopDefinition, ShopRegistry, ShopSystem, TransactionError, execute_buy, execute_sell,
    modified_price,
};
pub use slot::ItemSlot;
pub use uid::UniqueIdRegistry;
