//! Shop Registry
//!
//! Loads and caches shop definitions from TOML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::definition::ShopDefinition;

/// Registry for all shop definitions.
pub struct ShopRegistry {
    shops: HashMap<String, ShopDefinition>,
}

impl ShopRegistry {
    pub fn new() -> Self {
        Self {
            shops: HashMap::new(),
        }
    }

    /// Load all shop definitions from `<data_dir>/shops/*.toml`.
    pub fn load_from_directory(&mut self, data_dir: &Path) -> Result<(), String> {
        let shops_dir = data_dir.join("shops");

        if !shops_dir.exists() {
            warn!("Shops directory does not exist: {:?}", shops_dir);
            return Ok(());
        }

        for entry in fs::read_dir(&shops_dir).map_err(|e| e.to_string())? {
            let entry = entry.map_err(|e| e.to_string())?;
            let file_path = entry.path();

            if file_path.extension().and_then(|s| s.to_str()) == Some("toml") {
                let contents = fs::read_to_string(&file_path)
                    .map_err(|e| format!("Failed to read {:?}: {}", file_path, e))?;

                let shop: ShopDefinition = toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse {:?}: {}", file_path, e))?;

                if self.shops.contains_key(&shop.id) {
                    warn!("Duplicate shop id '{}' in {:?}, overwriting", shop.id, file_path);
                }

                self.shops.insert(shop.id.clone(), shop);
            }
        }

        info!("Loaded {} shop definitions", self.shops.len());
        Ok(())
    }

    pub fn get(&self, shop_id: &str) -> Option<&ShopDefinition> {
        self.shops.get(shop_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.shops.keys()
    }

    pub fn all(&self) -> impl Iterator<Item = &ShopDefinition> {
        self.shops.values()
    }

    pub fn contains(&self, shop_id: &str) -> bool {
        self.shops.contains_key(shop_id)
    }

    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}

impl Default for ShopRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_shops_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let shops_dir = temp_dir.path().join("shops");
        std::fs::create_dir(&shops_dir).unwrap();

        let toml_content = r#"
id = "general_store"
display_name = "General Store"
gold = 500
buy_markup = 0.2
sell_markup = -0.2

[[stock]]
item_id = 0
quantity = 5
"#;

        let mut file = std::fs::File::create(shops_dir.join("general_store.toml")).unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let mut registry = ShopRegistry::new();
        registry.load_from_directory(temp_dir.path()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("general_store"));

        let shop = registry.get("general_store").unwrap();
        assert_eq!(shop.display_name, "General Store");
        assert_eq!(shop.gold, 500);
        assert_eq!(shop.stock.len(), 1);
        assert_eq!(shop.stock[0].quantity, 5);
    }
}
