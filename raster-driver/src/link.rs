//! Serial link primitives
//!
//! The MAX7219 is written over a three-wire point-to-point link: data,
//! clock, and a chip-select line that frames each 16-bit register write.
//! This module owns the byte-level half of that: shifting one byte out
//! msb-first with a software clock. Chip-select stays with the
//! controller interface in [`crate::max7219`].

use embedded_hal::digital::OutputPin;

/// One-way byte transmitter towards the display controller.
///
/// The link carries no acknowledgement, so both operations are
/// fire-and-forget. The chip samples the data line on the rising clock
/// edge and expects the most significant bit first.
pub trait SerialLink {
    /// Shift one byte out on the link, msb first.
    fn write_byte(&mut self, byte: u8);

    /// Return the link to its idle state: clock low, and any transmit
    /// status the backend keeps cleared. Called once before the first
    /// command is sent.
    fn reset(&mut self);
}

impl<L: SerialLink + ?Sized> SerialLink for &mut L {
    fn write_byte(&mut self, byte: u8) {
        L::write_byte(self, byte);
    }

    fn reset(&mut self) {
        L::reset(self);
    }
}

/// Bit-banged link over two GPIO output pins.
///
/// Per bit: drive the data line, then pulse the clock high and low. On
/// cores whose instruction rate is well below the chip's 10 MHz clock
/// ceiling, plain pin writes already satisfy the setup/hold times and no
/// cycle counting is needed. Targets that do need an exact cadence
/// provide their own [`SerialLink`] instead.
pub struct BitBangLink<DATA, CLK> {
    data: DATA,
    clock: CLK,
}

impl<DATA: OutputPin, CLK: OutputPin> BitBangLink<DATA, CLK> {
    /// Take ownership of the data and clock pins.
    pub fn new(data: DATA, clock: CLK) -> Self {
        Self { data, clock }
    }
}

impl<DATA: OutputPin, CLK: OutputPin> SerialLink for BitBangLink<DATA, CLK> {
    fn write_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                let _ = self.data.set_high();
            } else {
                let _ = self.data.set_low();
            }
            let _ = self.clock.set_high();
            let _ = self.clock.set_low();
        }
    }

    fn reset(&mut self) {
        let _ = self.clock.set_low();
    }
}
