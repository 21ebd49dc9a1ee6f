//! Item catalog
//!
//! Lookup collaborator for the print surface. The full catalog lives
//! elsewhere in the ERP; the station only needs SKU resolution for label
//! jobs, so this is a plain in-memory index.

use shared::LabelItem;
use std::collections::HashMap;

/// In-memory SKU index
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, LabelItem>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a list of items
    pub fn with_items(items: impl IntoIterator<Item = LabelItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.sku.clone(), item))
                .collect(),
        }
    }

    /// Add or replace an item
    pub fn insert(&mut self, item: LabelItem) {
        self.items.insert(item.sku.clone(), item);
    }

    /// Resolve a SKU to its item, if known
    pub fn find_item_by_sku(&self, sku: &str) -> Option<LabelItem> {
        self.items.get(sku).cloned()
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
