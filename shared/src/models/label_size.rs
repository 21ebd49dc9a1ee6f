//! Label Size Model
//!
//! Sizes are expressed in device dots (203 dpi thermal heads: 8 dots/mm).

use serde::{Deserialize, Serialize};

/// A named physical label profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSize {
    pub name: String,
    pub width_dots: u32,
    pub height_dots: u32,
}

impl LabelSize {
    pub fn new(name: impl Into<String>, width_dots: u32, height_dots: u32) -> Self {
        Self {
            name: name.into(),
            width_dots,
            height_dots,
        }
    }

    /// The fixed catalog of supported label stock.
    ///
    /// Operators pick from this set; there is no free-form size entry.
    pub fn catalog() -> Vec<LabelSize> {
        vec![
            LabelSize::new("2x1", 400, 200),
            LabelSize::new("2.25x1.25", 456, 256),
            LabelSize::new("4x2", 812, 406),
            LabelSize::new("4x6", 812, 1218),
        ]
    }

    /// Look up a catalog profile by name.
    pub fn by_name(name: &str) -> Option<LabelSize> {
        Self::catalog().into_iter().find(|s| s.name == name)
    }
}

impl Default for LabelSize {
    fn default() -> Self {
        LabelSize::new("2x1", 400, 200)
    }
}
