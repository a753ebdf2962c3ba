#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use max7219_matrix::{Font, Rotation, MAX7219};
use panic_halt as _;

const NUM_MODULES: usize = 4; // one FC-16 style 32x8 board
const DEFAULT_INTENSITY: u8 = 1;

// 4 columns per glyph, bit 0 at the top: digits 0-9
const DIGITS_4X7: [u8; 41] = [
    4, //
    0x3E, 0x41, 0x41, 0x3E, //
    0x00, 0x42, 0x7F, 0x40, //
    0x62, 0x51, 0x49, 0x46, //
    0x22, 0x49, 0x49, 0x36, //
    0x18, 0x14, 0x7F, 0x10, //
    0x27, 0x45, 0x45, 0x39, //
    0x3E, 0x49, 0x49, 0x32, //
    0x01, 0x71, 0x09, 0x07, //
    0x36, 0x49, 0x49, 0x36, //
    0x26, 0x49, 0x49, 0x3E, //
];

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let din = pins.d11.into_output();
    let clk = pins.d13.into_output();
    let cs = pins.d10.into_output();

    let mut display: MAX7219<_, _, _, NUM_MODULES> =
        MAX7219::new(din, clk, cs, Rotation::Rotate90);
    display.init(DEFAULT_INTENSITY).unwrap();
    let font = Font::new(&DIGITS_4X7).unwrap();

    ufmt::uwriteln!(&mut serial, "Display test...").unwrap_infallible();
    display.display_test(true).unwrap();
    arduino_hal::delay_ms(500);
    display.display_test(false).unwrap();

    ufmt::uwriteln!(&mut serial, "Fading in...").unwrap_infallible();
    display.buffer_mut().invert();
    display.refresh_all().unwrap();
    for intensity in 0..=max7219_matrix::MAX_INTENSITY {
        display.set_intensity(intensity).unwrap();
        arduino_hal::delay_ms(100);
    }
    display.set_intensity(DEFAULT_INTENSITY).unwrap();
    display.buffer_mut().clear();

    ufmt::uwriteln!(&mut serial, "Scrolling digits...").unwrap_infallible();
    let spare = max7219_matrix::FrameBuffer::<NUM_MODULES>::WIDTH;
    let mut digit: u8 = 0;
    loop {
        let width = display.buffer_mut().show_char(digit, spare, &font);
        for _ in 0..=width {
            display.buffer_mut().scroll_left();
            display.refresh_all().unwrap();
            arduino_hal::delay_ms(60);
        }
        digit = (digit + 1) % 10;
    }
}
