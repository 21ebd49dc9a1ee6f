//! Print Job Models

use super::LabelItem;
use serde::{Deserialize, Serialize};

/// What goes on each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintType {
    Barcode,
    QrCode,
    Both,
}

impl PrintType {
    pub fn wants_barcode(&self) -> bool {
        matches!(self, PrintType::Barcode | PrintType::Both)
    }

    pub fn wants_qr(&self) -> bool {
        matches!(self, PrintType::QrCode | PrintType::Both)
    }
}

/// A single print action, created per user trigger and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJobRequest {
    pub item: LabelItem,
    pub code_value: String,
    pub copies: u32,
    pub print_type: PrintType,
}

impl PrintJobRequest {
    /// Build a request from UI input. `copies < 1` is clamped to 1 here,
    /// at the boundary; the batch builder clamps again on its own.
    pub fn new(
        item: LabelItem,
        code_value: impl Into<String>,
        copies: u32,
        print_type: PrintType,
    ) -> Self {
        Self {
            item,
            code_value: code_value.into(),
            copies: copies.max(1),
            print_type,
        }
    }
}

/// Outcome of one dispatch attempt. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintResult {
    pub success: bool,
    pub printer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl PrintResult {
    pub fn ok(printer_name: impl Into<String>) -> Self {
        Self {
            success: true,
            printer_name: printer_name.into(),
            error_message: None,
        }
    }

    pub fn failure(printer_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            printer_name: printer_name.into(),
            error_message: Some(message.into()),
        }
    }
}
