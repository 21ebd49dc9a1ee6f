//! ZPL II command builder
//!
//! Provides a fluent API for building one label unit as a ZPL format block.

/// ZPL command builder
///
/// Builds a single `^XA..^XZ` format block for a fixed-size label.
/// Positions are absolute, in device dots, measured from the label origin.
/// The configured X/Y offset is added to every element position; an element
/// pushed past the origin by a negative offset pins to the label edge.
pub struct ZplBuilder {
    buf: String,
    width: u32,
    height: u32,
    offset_x: i32,
    offset_y: i32,
}

impl ZplBuilder {
    /// Create a new builder for a label of the given size in dots
    ///
    /// Common sizes at 203 dpi (8 dots/mm):
    /// - 2"x1" stock: 400x200
    /// - 4"x6" stock: 812x1218
    pub fn new(width: u32, height: u32) -> Self {
        let mut buf = String::with_capacity(512);
        // Format start, print width, label length
        buf.push_str("^XA\n");
        buf.push_str(&format!("^PW{}\n", width));
        buf.push_str(&format!("^LL{}\n", height));
        Self {
            buf,
            width,
            height,
            offset_x: 0,
            offset_y: 0,
        }
    }

    /// Apply a calibration offset to all subsequent element positions
    pub fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Get the configured label width in dots
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the configured label height in dots
    pub fn height(&self) -> u32 {
        self.height
    }

    // === Elements ===

    /// Draw text at (x, y) with the given font height in dots
    pub fn text(&mut self, x: u32, y: u32, font_height: u32, s: &str) -> &mut Self {
        let (x, y) = self.position(x, y);
        self.buf.push_str(&format!(
            "^FO{},{}^A0N,{},{}^FD{}^FS\n",
            x,
            y,
            font_height,
            font_height,
            sanitize(s)
        ));
        self
    }

    /// Draw a Code 128 barcode with human-readable interpretation line
    ///
    /// `module_width` is the narrow-bar width in dots (1-10).
    pub fn barcode_128(
        &mut self,
        x: u32,
        y: u32,
        height: u32,
        module_width: u32,
        data: &str,
    ) -> &mut Self {
        let (x, y) = self.position(x, y);
        let module_width = module_width.clamp(1, 10);
        self.buf.push_str(&format!(
            "^FO{},{}^BY{}^BCN,{},Y,N,N^FD{}^FS\n",
            x,
            y,
            module_width,
            height,
            sanitize(data)
        ));
        self
    }

    /// Draw a QR code (model 2, error correction M)
    ///
    /// `magnification` is the module size in dots (1-10).
    pub fn qr(&mut self, x: u32, y: u32, magnification: u32, data: &str) -> &mut Self {
        let (x, y) = self.position(x, y);
        let magnification = magnification.clamp(1, 10);
        self.buf.push_str(&format!(
            "^FO{},{}^BQN,2,{}^FDMA,{}^FS\n",
            x,
            y,
            magnification,
            sanitize(data)
        ));
        self
    }

    /// Draw a rectangular box outline with the given border thickness
    pub fn frame(&mut self, x: u32, y: u32, w: u32, h: u32, thickness: u32) -> &mut Self {
        let (x, y) = self.position(x, y);
        self.buf
            .push_str(&format!("^FO{},{}^GB{},{},{}^FS\n", x, y, w, h, thickness));
        self
    }

    /// Write a raw command fragment directly
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    // === Build ===

    /// Close the format block and return the command string
    pub fn build(mut self) -> String {
        self.buf.push_str("^XZ\n");
        self.buf
    }

    /// Offset-adjusted element position, pinned at the label origin
    fn position(&self, x: u32, y: u32) -> (u32, u32) {
        let x = (x as i64 + self.offset_x as i64).max(0) as u32;
        let y = (y as i64 + self.offset_y as i64).max(0) as u32;
        (x, y)
    }
}

/// Strip ZPL control characters from field data
///
/// `^` and `~` introduce commands inside `^FD` and would corrupt the format
/// block if passed through.
fn sanitize(s: &str) -> String {
    s.chars().filter(|c| *c != '^' && *c != '~').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let mut b = ZplBuilder::new(400, 200);
        b.text(10, 10, 30, "Widget");
        let zpl = b.build();

        assert!(zpl.starts_with("^XA"));
        assert!(zpl.contains("^PW400"));
        assert!(zpl.contains("^LL200"));
        assert!(zpl.contains("^FO10,10^A0N,30,30^FDWidget^FS"));
        assert!(zpl.ends_with("^XZ\n"));
    }

    #[test]
    fn test_offset_shifts_elements() {
        let mut b = ZplBuilder::new(400, 200).with_offset(15, -5);
        b.text(10, 10, 30, "Widget");
        let zpl = b.build();

        assert!(zpl.contains("^FO25,5^"));
    }

    #[test]
    fn test_negative_offset_pins_at_origin() {
        let mut b = ZplBuilder::new(400, 200).with_offset(-100, -100);
        b.text(10, 10, 30, "Widget");
        let zpl = b.build();

        assert!(zpl.contains("^FO0,0^"));
    }

    #[test]
    fn test_barcode_and_qr_primitives() {
        let mut b = ZplBuilder::new(400, 200);
        b.barcode_128(10, 60, 100, 2, "SKU-10001");
        b.qr(250, 60, 4, "SKU-10001");
        let zpl = b.build();

        assert!(zpl.contains("^BCN,100,Y,N,N^FDSKU-10001^FS"));
        assert!(zpl.contains("^BQN,2,4^FDMA,SKU-10001^FS"));
    }

    #[test]
    fn test_field_data_sanitized() {
        let mut b = ZplBuilder::new(400, 200);
        b.text(0, 0, 20, "bad^XZ~data");
        let zpl = b.build();

        assert!(zpl.contains("^FDbadXZdata^FS"));
    }

    #[test]
    fn test_frame() {
        let mut b = ZplBuilder::new(400, 200);
        b.frame(0, 0, 400, 200, 3);
        let zpl = b.build();

        assert!(zpl.contains("^GB400,200,3^FS"));
    }
}
