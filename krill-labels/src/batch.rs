//! Batch expansion
//!
//! Turns one print action into the ordered sequence of label units to
//! render. Pure and restartable; no hidden state.

use serde::{Deserialize, Serialize};
use shared::{LabelItem, PrintType};

/// One label unit awaiting rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    pub item: LabelItem,
    pub code_value: String,
    pub print_type: PrintType,
}

/// Expand a print action into `copies` identical descriptors.
///
/// `copies < 1` is clamped to 1 here as well as at the request boundary, so
/// a caller bypassing `PrintJobRequest` still cannot produce an empty batch.
pub fn build_batch(
    item: &LabelItem,
    code_value: &str,
    copies: u32,
    print_type: PrintType,
) -> Vec<LabelDescriptor> {
    let copies = copies.max(1);
    let descriptor = LabelDescriptor {
        item: item.clone(),
        code_value: code_value.to_string(),
        print_type,
    };

    vec![descriptor; copies as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> LabelItem {
        LabelItem::new("SKU-10001", "Widget")
    }

    #[test]
    fn test_batch_count_and_content() {
        let batch = build_batch(&widget(), "X123", 3, PrintType::Both);

        assert_eq!(batch.len(), 3);
        for desc in &batch {
            assert_eq!(desc.item, widget());
            assert_eq!(desc.code_value, "X123");
            assert_eq!(desc.print_type, PrintType::Both);
        }
    }

    #[test]
    fn test_zero_copies_clamped() {
        let batch = build_batch(&widget(), "X123", 0, PrintType::Barcode);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_single_copy() {
        let batch = build_batch(&widget(), "X123", 1, PrintType::QrCode);
        assert_eq!(batch.len(), 1);
    }
}
