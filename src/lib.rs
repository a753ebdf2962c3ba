#![no_std]

mod bitbang;
mod constants;
mod font;
mod framebuffer;

use bitbang::BitBang;
pub use constants::*;
pub use font::Font;
pub use framebuffer::{FrameBuffer, FrameBufferError, Rotation};
use embedded_hal::digital::OutputPin;

/// Driver for `N` daisy-chained MAX7219 8x8 matrix modules on three GPIO
/// lines. Module 0 is the one wired to the microcontroller.
pub struct MAX7219<DIN, CLK, CS, const N: usize> {
    bus: BitBang<DIN, CLK, CS>,
    buffer: FrameBuffer<N>,
    rotation: Rotation,
}

impl<DIN, CLK, CS, E, const N: usize> MAX7219<DIN, CLK, CS, N>
where
    DIN: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    const NON_EMPTY_CHAIN: () = assert!(N > 0, "N must be greater than 0");

    pub fn new(din: DIN, clk: CLK, cs: CS, rotation: Rotation) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY_CHAIN;
        Self {
            bus: BitBang::new(din, clk, cs),
            buffer: FrameBuffer::new(),
            rotation,
        }
    }

    pub fn destroy(self) -> (DIN, CLK, CS) {
        self.bus.release()
    }

    pub const fn module_count() -> usize {
        N
    }

    /// Brings every module into matrix mode with a blank picture.
    ///
    /// Registers are programmed while the chips are shut down so no stale
    /// digit data flashes up, then normal operation is resumed.
    pub fn init(&mut self, intensity: u8) -> Result<(), Max7219Error<E>> {
        if intensity > MAX_INTENSITY {
            return Err(Max7219Error::InvalidValue);
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("max7219: init {} modules, intensity {}", N, intensity);

        self.bus.idle()?;
        self.send_command_all(
            register::DISPLAY_TEST,
            register::display_test::NORMAL_OPERATION,
        )?;
        self.send_command_all(register::SCAN_LIMIT, MAX_SCAN_LIMIT)?;
        self.send_command_all(register::DECODE_MODE, register::decode_mode::NO_DECODE)?;
        self.send_command_all(register::INTENSITY, intensity)?;
        self.power_off()?;

        self.buffer.clear();
        self.refresh_all()?;
        self.power_on()
    }

    /// Sends `register`/`data` to module `addr`; all other modules get a
    /// no-op in the same frame.
    pub fn send_command(
        &mut self,
        addr: usize,
        register: u8,
        data: u8,
    ) -> Result<(), Max7219Error<E>> {
        if addr >= N {
            return Err(Max7219Error::InvalidModule(addr));
        }
        self.bus.frame(|bus| {
            for i in (0..N).rev() {
                if i == addr {
                    bus.shift_pair(register, data)?;
                } else {
                    bus.shift_pair(register::NOOP, 0)?;
                }
            }
            Ok(())
        })?;
        Ok(())
    }

    pub fn send_command_all(&mut self, register: u8, data: u8) -> Result<(), Max7219Error<E>> {
        self.bus.frame(|bus| {
            for _ in 0..N {
                bus.shift_pair(register, data)?;
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Writes one module's 8 digit registers from the framebuffer.
    pub fn refresh(&mut self, addr: usize) -> Result<(), Max7219Error<E>> {
        if addr >= N {
            return Err(Max7219Error::InvalidModule(addr));
        }
        for digit in 0..8 {
            let row = self.buffer.digit_row(addr, digit, self.rotation);
            self.send_command(addr, register::DIGIT_OFFSET + digit, row)?;
        }
        Ok(())
    }

    /// Writes the whole framebuffer, one frame per digit register.
    pub fn refresh_all(&mut self) -> Result<(), Max7219Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("max7219: refresh all, rotation {}", self.rotation);

        let Self {
            bus,
            buffer,
            rotation,
        } = self;
        for digit in 0..8 {
            bus.frame(|bus| {
                for module in (0..N).rev() {
                    let row = buffer.digit_row(module, digit, *rotation);
                    bus.shift_pair(register::DIGIT_OFFSET + digit, row)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Max7219Error<E>> {
        if intensity > MAX_INTENSITY {
            return Err(Max7219Error::InvalidValue);
        }
        self.send_command_all(register::INTENSITY, intensity)
    }

    pub fn set_module_intensity(
        &mut self,
        addr: usize,
        intensity: u8,
    ) -> Result<(), Max7219Error<E>> {
        if intensity > MAX_INTENSITY {
            return Err(Max7219Error::InvalidValue);
        }
        self.send_command(addr, register::INTENSITY, intensity)
    }

    pub fn power_on(&mut self) -> Result<(), Max7219Error<E>> {
        self.send_command_all(register::SHUTDOWN, register::shutdown::NORMAL_OPERATION)
    }

    pub fn power_off(&mut self) -> Result<(), Max7219Error<E>> {
        self.send_command_all(register::SHUTDOWN, register::shutdown::SHUTDOWN_MODE)
    }

    /// Lights every LED regardless of register contents while enabled.
    pub fn display_test(&mut self, enabled: bool) -> Result<(), Max7219Error<E>> {
        let mode = if enabled {
            register::display_test::DISPLAY_TEST_MODE
        } else {
            register::display_test::NORMAL_OPERATION
        };
        self.send_command_all(register::DISPLAY_TEST, mode)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Takes effect on the next refresh.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn buffer(&self) -> &FrameBuffer<N> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut FrameBuffer<N> {
        &mut self.buffer
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max7219Error<E> {
    PinError(E),
    InvalidValue,
    InvalidModule(usize),
}

impl<E> From<E> for Max7219Error<E> {
    fn from(error: E) -> Self {
        Max7219Error::PinError(error)
    }
}
