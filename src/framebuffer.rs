use crate::{Font, COLUMNS_PER_MODULE, SPARE_COLUMNS};

/// How framebuffer columns map onto a module's digit registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Column `c` of a module is written to digit register `c` unchanged.
    #[default]
    None,
    Rotate90,
    Rotate270,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameBufferError {
    InvalidColumn(usize),
    InvalidRow(usize),
}

/// Column-major pixel store for `N` chained 8x8 modules.
///
/// Each byte is one column of 8 pixels, bit 0 at the top. Module `i` owns
/// columns `i * 8 .. i * 8 + 8`. Eight extra columns sit past the visible
/// area so a glyph can be staged there and scrolled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    visible: [[u8; COLUMNS_PER_MODULE]; N],
    spare: [u8; SPARE_COLUMNS],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    pub const WIDTH: usize = N * COLUMNS_PER_MODULE;
    pub const HEIGHT: usize = 8;
    /// Visible columns plus the off-screen spare columns.
    pub const TOTAL_COLUMNS: usize = Self::WIDTH + SPARE_COLUMNS;

    pub const fn new() -> Self {
        Self {
            visible: [[0; COLUMNS_PER_MODULE]; N],
            spare: [0; SPARE_COLUMNS],
        }
    }

    /// Blanks the visible area. Spare columns keep their content.
    pub fn clear(&mut self) {
        self.visible = [[0; COLUMNS_PER_MODULE]; N];
    }

    /// Shifts every column one place to the left, pulling in the spare
    /// columns. The last spare column keeps its value.
    pub fn scroll_left(&mut self) {
        for col in 0..Self::TOTAL_COLUMNS - 1 {
            let next = self.get(col + 1);
            *self.slot_mut(col) = next;
        }
    }

    pub fn invert(&mut self) {
        for byte in self.visible.iter_mut().flatten() {
            *byte = !*byte;
        }
    }

    pub fn column(&self, col: usize) -> Result<u8, FrameBufferError> {
        if col >= Self::TOTAL_COLUMNS {
            return Err(FrameBufferError::InvalidColumn(col));
        }
        Ok(self.get(col))
    }

    pub fn set_column(&mut self, col: usize, value: u8) -> Result<(), FrameBufferError> {
        if col >= Self::TOTAL_COLUMNS {
            return Err(FrameBufferError::InvalidColumn(col));
        }
        *self.slot_mut(col) = value;
        Ok(())
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<bool, FrameBufferError> {
        self.check_visible(x, y)?;
        Ok(self.get(x) & (1 << y) != 0)
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> Result<(), FrameBufferError> {
        self.check_visible(x, y)?;
        let slot = self.slot_mut(x);
        if on {
            *slot |= 1 << y;
        } else {
            *slot &= !(1 << y);
        }
        Ok(())
    }

    /// Copies a glyph into the buffer starting at `col` and returns the
    /// glyph width. Columns falling past the spare area are dropped, and an
    /// unknown glyph leaves the buffer unchanged and returns 0.
    pub fn show_char(&mut self, ch: u8, col: usize, font: &Font<'_>) -> usize {
        let Some(glyph) = font.glyph(ch) else {
            return 0;
        };
        for (target, &bits) in (col..Self::TOTAL_COLUMNS).zip(glyph) {
            *self.slot_mut(target) = bits;
        }
        glyph.len()
    }

    /// The visible columns, left to right.
    pub fn columns(&self) -> &[u8] {
        self.visible.as_flattened()
    }

    pub fn module(&self, index: usize) -> Option<&[u8; COLUMNS_PER_MODULE]> {
        self.visible.get(index)
    }

    /// Register value for digit `digit` (0..8) of module `module` under the
    /// given rotation. Callers check `module < N`.
    pub(crate) fn digit_row(&self, module: usize, digit: u8, rotation: Rotation) -> u8 {
        let cols = &self.visible[module];
        let digit = digit as usize & 0x07;
        match rotation {
            Rotation::None => cols[digit],
            Rotation::Rotate90 => {
                let mask = 0x80 >> digit;
                cols.iter()
                    .enumerate()
                    .filter(|(_, col)| **col & mask != 0)
                    .fold(0, |row, (b, _)| row | (1 << b))
            }
            Rotation::Rotate270 => {
                let mask = 1 << digit;
                cols.iter()
                    .enumerate()
                    .filter(|(_, col)| **col & mask != 0)
                    .fold(0, |row, (b, _)| row | (0x80 >> b))
            }
        }
    }

    fn check_visible(&self, x: usize, y: usize) -> Result<(), FrameBufferError> {
        if x >= Self::WIDTH {
            return Err(FrameBufferError::InvalidColumn(x));
        }
        if y >= Self::HEIGHT {
            return Err(FrameBufferError::InvalidRow(y));
        }
        Ok(())
    }

    fn get(&self, col: usize) -> u8 {
        if col < Self::WIDTH {
            self.visible[col / COLUMNS_PER_MODULE][col % COLUMNS_PER_MODULE]
        } else {
            self.spare[col - Self::WIDTH]
        }
    }

    fn slot_mut(&mut self, col: usize) -> &mut u8 {
        if col < Self::WIDTH {
            &mut self.visible[col / COLUMNS_PER_MODULE][col % COLUMNS_PER_MODULE]
        } else {
            &mut self.spare[col - Self::WIDTH]
        }
    }
}

#[cfg(feature = "graphics")]
mod graphics {
    use super::FrameBuffer;
    use core::convert::Infallible;
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::{DrawTarget, OriginDimensions, Size},
        Pixel,
    };

    impl<const N: usize> OriginDimensions for FrameBuffer<N> {
        fn size(&self) -> Size {
            Size::new(Self::WIDTH as u32, Self::HEIGHT as u32)
        }
    }

    impl<const N: usize> DrawTarget for FrameBuffer<N> {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(coord, color) in pixels {
                if coord.x < 0 || coord.y < 0 {
                    continue;
                }
                // off-screen pixels are clipped
                let _ = self.set_pixel(coord.x as usize, coord.y as usize, color.is_on());
            }
            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            let fill = if color.is_on() { 0xFF } else { 0x00 };
            self.visible = [[fill; crate::COLUMNS_PER_MODULE]; N];
            Ok(())
        }
    }
}
