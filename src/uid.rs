use std::collections::HashSet;

use uuid::Uuid;

// ============================================================================
// Unique Id Registry
// ============================================================================

/// Session-scoped registry of persistable-object identifiers.
///
/// Passed explicitly to whatever spawns saveable containers — there is no
/// ambient static map. Identifiers are generated once at creation time and
/// survive save/load; the registry only guarantees uniqueness within the
/// session it belongs to.
pub struct UniqueIdRegistry {
    ids: HashSet<String>,
}

impl UniqueIdRegistry {
    pub fn new() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }

    /// Generate a fresh identifier and register it.
    pub fn generate(&mut self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.ids.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Claim an identifier loaded from a save. False if it is already taken,
    /// in which case the caller should generate a replacement.
    pub fn claim(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Release an identifier when its object is destroyed.
    pub fn release(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for UniqueIdRegistry {
    fn default() -> Self {
        Self::new()
    }
}
