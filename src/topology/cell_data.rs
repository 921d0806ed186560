//! Per-cell named scalar items such as the target area

use std::collections::BTreeMap;

/// Named scalar items attached to a single cell
///
/// Items are kept in name order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellData {
    items: BTreeMap<String, f64>,
}

impl CellData {
    /// Create an empty item collection
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Set or replace an item
    pub fn set_item(&mut self, name: impl Into<String>, value: f64) {
        self.items.insert(name.into(), value);
    }

    /// Look up an item by name
    pub fn item(&self, name: &str) -> Option<f64> {
        self.items.get(name).copied()
    }

    /// Test whether an item is present
    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Names of all stored items in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if no items are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
