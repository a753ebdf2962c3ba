extern crate max7219_matrix;

use max7219_matrix::{Font, FrameBuffer, FrameBufferError};

const NUM_MODULES: usize = 2;

// 3 columns per glyph: '0', '1', '2'
const DIGITS_3X5: [u8; 10] = [
    3, //
    0x1F, 0x11, 0x1F, //
    0x00, 0x1F, 0x00, //
    0x1D, 0x15, 0x17, //
];

fn font() -> Font<'static> {
    Font::new(&DIGITS_3X5).unwrap()
}

#[test]
fn font_layout() {
    let font = font();
    assert_eq!(font.width(), 3);
    assert_eq!(font.glyph_count(), 3);
    assert_eq!(font.glyph(1), Some(&[0x00, 0x1F, 0x00][..]));
    assert_eq!(font.glyph(3), None);

    assert!(Font::new(&[]).is_none());
    assert!(Font::new(&[0, 1, 2]).is_none());
}

#[test]
fn show_char_copies_columns_and_clips() {
    let mut fb: FrameBuffer<NUM_MODULES> = FrameBuffer::new();
    let font = font();

    assert_eq!(fb.show_char(2, 4, &font), 3);
    assert_eq!(&fb.columns()[4..7], &[0x1D, 0x15, 0x17]);

    // last glyph column lands past the spare area and is dropped
    let last = FrameBuffer::<NUM_MODULES>::TOTAL_COLUMNS - 2;
    assert_eq!(fb.show_char(0, last, &font), 3);
    assert_eq!(fb.column(last), Ok(0x1F));
    assert_eq!(fb.column(last + 1), Ok(0x11));

    let before = fb.clone();
    assert_eq!(fb.show_char(9, 0, &font), 0);
    assert_eq!(fb, before);
}

#[test]
fn show_char_far_past_the_end_is_dropped() {
    let mut fb: FrameBuffer<1> = FrameBuffer::new();
    let font = font();

    assert_eq!(fb.show_char(0, usize::MAX - 1, &font), 3);
    assert_eq!(fb.show_char(1, FrameBuffer::<1>::TOTAL_COLUMNS, &font), 3);
    assert_eq!(fb, FrameBuffer::new());
}

#[test]
fn scroll_left_pulls_in_spare_columns() {
    let mut fb: FrameBuffer<NUM_MODULES> = FrameBuffer::new();
    let width = FrameBuffer::<NUM_MODULES>::WIDTH;
    fb.set_column(0, 0xAA).unwrap();
    fb.set_column(1, 0x01).unwrap();
    fb.set_column(width, 0x42).unwrap();
    fb.set_column(width + 7, 0x99).unwrap();

    fb.scroll_left();
    assert_eq!(fb.column(0), Ok(0x01));
    assert_eq!(fb.column(width - 1), Ok(0x42));
    assert_eq!(fb.column(width + 6), Ok(0x99));
    // final spare column is not refilled
    assert_eq!(fb.column(width + 7), Ok(0x99));
}

#[test]
fn clear_and_invert_touch_only_visible_columns() {
    let mut fb: FrameBuffer<NUM_MODULES> = FrameBuffer::new();
    let width = FrameBuffer::<NUM_MODULES>::WIDTH;
    fb.set_column(3, 0x0F).unwrap();
    fb.set_column(width + 1, 0x33).unwrap();

    fb.invert();
    assert_eq!(fb.column(3), Ok(0xF0));
    assert_eq!(fb.column(0), Ok(0xFF));
    assert_eq!(fb.column(width + 1), Ok(0x33));

    fb.clear();
    assert!(fb.columns().iter().all(|&c| c == 0));
    assert_eq!(fb.column(width + 1), Ok(0x33));
}

#[test]
fn pixels_and_bounds() {
    let mut fb: FrameBuffer<NUM_MODULES> = FrameBuffer::new();
    fb.set_pixel(9, 0, true).unwrap();
    fb.set_pixel(9, 7, true).unwrap();
    assert_eq!(fb.module(1).unwrap()[1], 0x81);
    assert_eq!(fb.pixel(9, 7), Ok(true));

    fb.set_pixel(9, 0, false).unwrap();
    assert_eq!(fb.column(9), Ok(0x80));

    assert_eq!(fb.set_pixel(16, 0, true), Err(FrameBufferError::InvalidColumn(16)));
    assert_eq!(fb.pixel(0, 8), Err(FrameBufferError::InvalidRow(8)));
    assert_eq!(fb.set_column(24, 1), Err(FrameBufferError::InvalidColumn(24)));
    assert!(fb.module(NUM_MODULES).is_none());
}

#[cfg(feature = "graphics")]
#[test]
fn graphics_draws_into_columns() {
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::{Line, PrimitiveStyle},
    };

    let mut fb: FrameBuffer<NUM_MODULES> = FrameBuffer::new();
    assert_eq!(fb.size(), Size::new(16, 8));

    Line::new(Point::new(0, 2), Point::new(20, 2))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut fb)
        .unwrap();
    assert!(fb.columns().iter().all(|&c| c == 0x04));

    DrawTarget::clear(&mut fb, BinaryColor::On).unwrap();
    assert!(fb.columns().iter().all(|&c| c == 0xFF));
}
