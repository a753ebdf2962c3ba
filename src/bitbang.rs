use embedded_hal::digital::OutputPin;

/// Three-wire serial bus driven from plain GPIO.
///
/// Data is presented on `din` and latched by the chips on the rising edge
/// of `clk`. Everything shifted while `cs` is low is committed when `cs`
/// goes high again.
pub struct BitBang<DIN, CLK, CS> {
    din: DIN,
    clk: CLK,
    cs: CS,
}

impl<DIN, CLK, CS, E> BitBang<DIN, CLK, CS>
where
    DIN: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    pub fn new(din: DIN, clk: CLK, cs: CS) -> Self {
        Self { din, clk, cs }
    }

    pub fn release(self) -> (DIN, CLK, CS) {
        (self.din, self.clk, self.cs)
    }

    /// Idle state: chip-select deasserted, clock low.
    pub fn idle(&mut self) -> Result<(), E> {
        self.cs.set_high()?;
        self.clk.set_low()
    }

    /// Runs `body` inside one chip-select window.
    pub fn frame<F>(&mut self, body: F) -> Result<(), E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.cs.set_low()?;
        body(self)?;
        self.cs.set_high()
    }

    /// Shifts one byte out, MSB first.
    pub fn shift_out(&mut self, value: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            if value & (1 << bit) != 0 {
                self.din.set_high()?;
            } else {
                self.din.set_low()?;
            }
            self.clk.set_high()?;
            self.clk.set_low()?;
        }
        Ok(())
    }

    pub fn shift_pair(&mut self, register: u8, data: u8) -> Result<(), E> {
        self.shift_out(register)?;
        self.shift_out(data)
    }
}
