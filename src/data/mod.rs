pub mod catalog;
pub mod item_def;

pub use catalog::ItemCatalog;
pub use item_def::{ItemDefinition, RawItemDefinition};
