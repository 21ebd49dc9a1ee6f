//! Print Settings Model
//!
//! Calibration state for the active operator session. Not persisted;
//! every session starts from defaults.

use super::LabelSize;
use serde::{Deserialize, Serialize};

/// Current calibration: selected printer, label stock, and head offsets.
///
/// An empty `printer_name` means no printer has been selected yet; dispatch
/// must fail fast rather than attempt a send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSettings {
    pub printer_name: String,
    pub label_size: LabelSize,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl PrintSettings {
    pub fn has_printer(&self) -> bool {
        !self.printer_name.is_empty()
    }

    /// Merge a partial update into these settings, returning the new value.
    pub fn apply(mut self, patch: PrintSettingsPatch) -> Self {
        if let Some(printer_name) = patch.printer_name {
            self.printer_name = printer_name;
        }
        if let Some(label_size) = patch.label_size {
            self.label_size = label_size;
        }
        if let Some(offset_x) = patch.offset_x {
            self.offset_x = offset_x;
        }
        if let Some(offset_y) = patch.offset_y {
            self.offset_y = offset_y;
        }
        self
    }
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            printer_name: String::new(),
            label_size: LabelSize::default(),
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// Partial settings update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrintSettingsPatch {
    pub printer_name: Option<String>,
    pub label_size: Option<LabelSize>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
}

/// Horizontal alignment presets for quick offset calibration.
///
/// The derived offsets are heuristic fractions of the label width, not a
/// measured centering: Left pins to the origin, Center shifts by a quarter
/// width, Right by half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAlign {
    Left,
    Center,
    Right,
}

impl QuickAlign {
    /// The preset `offset_x` for a given label width.
    pub fn offset_x(&self, width_dots: u32) -> i32 {
        match self {
            QuickAlign::Left => 0,
            QuickAlign::Center => (width_dots / 4) as i32,
            QuickAlign::Right => (width_dots / 2) as i32,
        }
    }
}
