/// Fixed-width column font.
///
/// The first byte of `data` is the glyph width `w`; glyph `n` is the `w`
/// column bytes starting at `1 + n * w`. Bit 0 of a column is the top row.
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    width: u8,
    glyphs: &'a [u8],
}

impl<'a> Font<'a> {
    /// Returns `None` for empty data or a zero width.
    pub const fn new(data: &'a [u8]) -> Option<Self> {
        match data {
            [width, glyphs @ ..] if *width > 0 => Some(Self {
                width: *width,
                glyphs,
            }),
            _ => None,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len() / self.width as usize
    }

    pub fn glyph(&self, ch: u8) -> Option<&'a [u8]> {
        let width = self.width as usize;
        let start = ch as usize * width;
        self.glyphs.get(start..start + width)
    }
}
