//! # krill-labels
//!
//! ZPL label generation - low-level label description only.
//!
//! ## Scope
//!
//! This crate handles HOW a label is described:
//! - ZPL II command building (fixed label size, absolute positioning)
//! - Barcode (Code 128) and QR drawing primitives
//! - Batch expansion (one descriptor per copy)
//! - Calibration frame layout
//!
//! Business logic (WHAT to print, and where it goes) stays in application
//! code:
//! - Settings, validation and dispatch → krill-station
//! - Daemon transport and signing → krill-bridge
//!
//! ## Example
//!
//! ```ignore
//! use krill_labels::{build_batch, render_label};
//! use shared::{LabelItem, LabelSize, PrintType};
//!
//! let item = LabelItem::new("SKU-10001", "Widget");
//! let batch = build_batch(&item, "SKU-10001", 2, PrintType::Both);
//! let size = LabelSize::new("2x1", 400, 200);
//!
//! let commands: Vec<String> = batch
//!     .iter()
//!     .map(|desc| render_label(desc, &size, 0, 0))
//!     .collect();
//! ```

mod batch;
mod render;
mod zpl;

// Re-exports
pub use batch::{LabelDescriptor, build_batch};
pub use render::{render_label, render_test_frame};
pub use zpl::ZplBuilder;
