//! Label Item Model

use serde::{Deserialize, Serialize};

/// The thing being labelled: a catalog item identified by SKU.
///
/// Immutable once a print job starts; jobs carry their own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelItem {
    pub sku: String,
    pub display_name: String,
}

impl LabelItem {
    pub fn new(sku: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            display_name: display_name.into(),
        }
    }
}
