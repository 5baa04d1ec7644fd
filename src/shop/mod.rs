//! Shop System
//!
//! Merchant stock, cart accumulation and the buy/sell transaction engine.

pub mod cart;
pub mod definition;
pub mod registry;
pub mod system;
pub mod transaction;

pub use cart::{Cart, CartLine, modified_price};
pub use definition::{ShopDefinition, ShopStockEntry};
pub use registry::ShopRegistry;
pub use system::ShopSystem;
pub use transaction::{TransactionError, execute_buy, execute_sell};
