//! Label unit layout
//!
//! Turns a descriptor into a single ZPL format block sized to the selected
//! label stock and shifted by the calibration offsets.

use crate::batch::LabelDescriptor;
use crate::zpl::ZplBuilder;
use shared::{LabelSize, PrintSettings};
use tracing::instrument;

/// Edge margin around the printable content, in dots
const MARGIN: u32 = 10;

/// Render one label unit.
///
/// Layout, top to bottom: item name, human-readable code value, then the
/// machine-readable symbols. `Both` places the barcode on the left and the
/// QR on the right; a single symbol takes the left edge.
#[instrument(skip(descriptor), fields(sku = %descriptor.item.sku, print_type = ?descriptor.print_type))]
pub fn render_label(
    descriptor: &LabelDescriptor,
    size: &LabelSize,
    offset_x: i32,
    offset_y: i32,
) -> String {
    let name_font = (size.height_dots / 8).clamp(18, 40);
    let code_font = (name_font * 3 / 4).max(14);

    let mut builder =
        ZplBuilder::new(size.width_dots, size.height_dots).with_offset(offset_x, offset_y);

    builder.text(MARGIN, MARGIN, name_font, &descriptor.item.display_name);
    builder.text(
        MARGIN,
        MARGIN + name_font + 8,
        code_font,
        &descriptor.code_value,
    );

    let symbol_top = MARGIN + name_font + code_font + 24;
    let symbol_height = size
        .height_dots
        .saturating_sub(symbol_top + MARGIN)
        .max(30);

    if descriptor.print_type.wants_barcode() {
        builder.barcode_128(MARGIN, symbol_top, symbol_height, 2, &descriptor.code_value);
    }
    if descriptor.print_type.wants_qr() {
        // QR module size scaled to the room left for symbols
        let magnification = (symbol_height / 30).clamp(2, 10);
        let qr_x = if descriptor.print_type.wants_barcode() {
            size.width_dots * 3 / 5
        } else {
            MARGIN
        };
        builder.qr(qr_x, symbol_top, magnification, &descriptor.code_value);
    }

    builder.build()
}

/// Render a calibration frame: a bordered rectangle at the full label
/// dimensions, shifted by the current offsets, annotated with the offset
/// values so the operator can read the active calibration off the stock.
#[instrument(fields(printer = %settings.printer_name, size = %settings.label_size.name))]
pub fn render_test_frame(settings: &PrintSettings) -> String {
    let size = &settings.label_size;
    let font = (size.height_dots / 10).clamp(16, 30);

    let mut builder = ZplBuilder::new(size.width_dots, size.height_dots)
        .with_offset(settings.offset_x, settings.offset_y);

    builder.frame(0, 0, size.width_dots, size.height_dots, 3);
    builder.text(
        size.width_dots / 8,
        size.height_dots / 2 - font / 2,
        font,
        &format!("X{:+} Y{:+}", settings.offset_x, settings.offset_y),
    );

    builder.build()
}
