use serde::Deserialize;

// ============================================================================
// Raw Item Definition (direct from TOML)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RawItemDefinition {
    pub id: i32,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub max_stack: Option<i32>,
    pub gold_value: Option<i32>,
}

// ============================================================================
// Resolved Item Definition
// ============================================================================

/// Static description of an item kind. Immutable once the catalog is loaded;
/// slots share these via `Arc` and never outlive the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefinition {
    pub id: i32,
    pub display_name: String,
    pub description: String,
    /// Opaque asset key for the presentation layer.
    pub icon: String,
    pub max_stack: i32,
    /// Base unit price in gold, before any shop markup.
    pub gold_value: i32,
}

impl ItemDefinition {
    pub fn from_raw(key: &str, raw: &RawItemDefinition) -> Self {
        Self {
            id: raw.id,
            display_name: raw
                .display_name
                .clone()
                .unwrap_or_else(|| key.to_string()),
            description: raw.description.clone().unwrap_or_default(),
            icon: raw.icon.clone().unwrap_or_else(|| format!("item_{}", key)),
            max_stack: raw.max_stack.unwrap_or(99).max(1),
            gold_value: raw.gold_value.unwrap_or(0).max(0),
        }
    }
}
