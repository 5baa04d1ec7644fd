use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::item_def::{ItemDefinition, RawItemDefinition};

/// Catalog of all item definitions, keyed by stable integer id.
///
/// Loaded once at startup and read-only afterwards. Slots hold `Arc` clones
/// of the definitions, so the catalog must be built before any persisted
/// container is restored.
pub struct ItemCatalog {
    items: HashMap<i32, Arc<ItemDefinition>>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Load all item definitions from `<data_dir>/items/*.toml`.
    ///
    /// Each file is a table of entries keyed by a human-readable slug; the
    /// stable id lives inside the entry.
    pub fn load_from_directory(&mut self, data_dir: &Path) -> Result<(), String> {
        let items_dir = data_dir.join("items");

        if !items_dir.exists() {
            warn!("Items directory does not exist: {:?}", items_dir);
            return Ok(());
        }

        let entries = std::fs::read_dir(&items_dir)
            .map_err(|e| format!("Failed to read items directory: {}", e))?;

        for entry in entries {
            let entry = entry.map_err(|e| format!("Failed to read entry: {}", e))?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "toml") {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;

                let table: HashMap<String, RawItemDefinition> = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse {:?}: {}", path, e))?;

                for (key, raw) in table {
                    if self.items.contains_key(&raw.id) {
                        warn!("Duplicate item id {} in {:?}, overwriting", raw.id, path);
                    }
                    let item = ItemDefinition::from_raw(&key, &raw);
                    self.items.insert(item.id, Arc::new(item));
                }
            }
        }

        info!("Loaded {} item definitions", self.items.len());

        Ok(())
    }

    /// Insert a definition directly, bypassing file loading.
    pub fn insert(&mut self, item: ItemDefinition) -> Arc<ItemDefinition> {
        let item = Arc::new(item);
        self.items.insert(item.id, Arc::clone(&item));
        item
    }

    /// Resolve a stable id to its definition.
    pub fn get(&self, id: i32) -> Option<Arc<ItemDefinition>> {
        self.items.get(&id).map(Arc::clone)
    }

    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.items.keys().copied()
    }

    pub fn all(&self) -> impl Iterator<Item = &Arc<ItemDefinition>> {
        self.items.values()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new()
    }
}
