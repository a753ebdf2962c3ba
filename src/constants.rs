pub const COLUMNS_PER_MODULE: usize = 8;
pub const SPARE_COLUMNS: usize = 8; // off-screen room for a scrolling glyph
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const MAX_SCAN_LIMIT: u8 = 7;

pub mod register {
    pub const NOOP: u8 = 0x00;
    pub const DIGIT_OFFSET: u8 = 0x01; // Digit0 - Digit7
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // raw segment/row data for digits 7:0
    }

    pub mod shutdown {
        pub const SHUTDOWN_MODE: u8 = 0x00;
        pub const NORMAL_OPERATION: u8 = 0x01;
    }

    pub mod display_test {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const DISPLAY_TEST_MODE: u8 = 0x01;
    }
}
