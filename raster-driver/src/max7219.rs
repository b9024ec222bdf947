//! MAX7219 display controller interface
//!
//! The MAX7219 is an 8-digit LED driver configured through 16-bit
//! register writes: an address byte followed by a data byte, framed by
//! the LOAD/CS line. Driving an 8x8 matrix, the eight digit registers
//! hold the eight rows. The link back from the chip does not exist, so
//! every write is assumed to land; there is nothing to check and nothing
//! to retry.

use embedded_hal::digital::OutputPin;

use crate::link::SerialLink;

/// MAX7219 register addresses
pub mod reg {
    /// No-op, clocked into chips further down a cascade
    pub const NOOP: u8 = 0x00;
    /// Digit 0 data (matrix row 0)
    pub const DIGIT0: u8 = 0x01;
    /// Digit 1 data
    pub const DIGIT1: u8 = 0x02;
    /// Digit 2 data
    pub const DIGIT2: u8 = 0x03;
    /// Digit 3 data
    pub const DIGIT3: u8 = 0x04;
    /// Digit 4 data
    pub const DIGIT4: u8 = 0x05;
    /// Digit 5 data
    pub const DIGIT5: u8 = 0x06;
    /// Digit 6 data
    pub const DIGIT6: u8 = 0x07;
    /// Digit 7 data (matrix row 7)
    pub const DIGIT7: u8 = 0x08;
    /// BCD/Code B decode enable, one bit per digit
    pub const DECODE_MODE: u8 = 0x09;
    /// Brightness, 16 duty-cycle steps
    pub const INTENSITY: u8 = 0x0A;
    /// How many digits are scanned
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// Shutdown mode control
    pub const SHUTDOWN: u8 = 0x0C;
    /// Display test mode control (all segments on)
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// No Code B decoding on any digit; rows are raw bitmaps.
const DECODE_NONE: u8 = 0x00;
/// Scan all eight digits.
const SCAN_ALL_DIGITS: u8 = 0x07;
/// Leave display test mode.
const DISPLAY_TEST_OFF: u8 = 0x00;
/// Enter display test mode.
const DISPLAY_TEST_ON: u8 = 0x01;
/// Shutdown register data: display off.
const SHUTDOWN_MODE: u8 = 0x00;
/// Shutdown register data: normal operation.
const NORMAL_OPERATION: u8 = 0x01;

/// Dimmest intensity step.
pub const INTENSITY_MIN: u8 = 0x00;
/// Mid-range intensity step.
pub const INTENSITY_MID: u8 = 0x07;
/// Brightest intensity step.
pub const INTENSITY_MAX: u8 = 0x0F;

/// The configuration writes a bare chip needs after power-up, in the
/// order they must be issued.
///
/// Shutdown is only cleared once decode, scan limit and test mode are in
/// a known state, so the panel never flashes a transient garbage frame
/// while waking up.
pub fn init_commands() -> [(u8, u8); 5] {
    [
        (reg::DECODE_MODE, DECODE_NONE),
        (reg::SCAN_LIMIT, SCAN_ALL_DIGITS),
        (reg::DISPLAY_TEST, DISPLAY_TEST_OFF),
        (reg::SHUTDOWN, NORMAL_OPERATION),
        (reg::INTENSITY, INTENSITY_MID),
    ]
}

/// One MAX7219 behind a serial link and a chip-select pin.
pub struct Max7219<L, CS> {
    link: L,
    cs: CS,
}

impl<L: SerialLink, CS: OutputPin> Max7219<L, CS> {
    /// Take ownership of the link and the chip-select pin.
    pub fn new(link: L, cs: CS) -> Self {
        Self { link, cs }
    }

    /// Bring the chip out of its power-up state.
    ///
    /// Sets the idle line levels (select inactive high, clock low),
    /// resets the link, then issues the five mandatory configuration
    /// commands from [`init_commands`].
    pub fn init(&mut self) {
        let _ = self.cs.set_high();
        self.link.reset();
        for (address, data) in init_commands() {
            self.send_command(address, data);
        }
    }

    /// Write one register: select low, address byte, data byte, select
    /// high.
    ///
    /// The chip latches the 16 shifted bits on the rising select edge,
    /// so the bracket around exactly two bytes is what makes the write a
    /// write.
    pub fn send_command(&mut self, address: u8, data: u8) {
        let _ = self.cs.set_low();
        self.link.write_byte(address);
        self.link.write_byte(data);
        let _ = self.cs.set_high();
    }

    /// Write one matrix row into its digit register. Out-of-range rows
    /// are ignored.
    pub fn write_row(&mut self, row: u8, value: u8) {
        if row <= reg::DIGIT7 - reg::DIGIT0 {
            self.send_command(reg::DIGIT0 + row, value);
        }
    }

    /// Set the brightness, clamped to the chip's 16 steps.
    pub fn set_intensity(&mut self, level: u8) {
        self.send_command(reg::INTENSITY, level.min(INTENSITY_MAX));
    }

    /// Leave shutdown mode; the panel lights up with the current
    /// register contents.
    pub fn power_on(&mut self) {
        self.send_command(reg::SHUTDOWN, NORMAL_OPERATION);
    }

    /// Enter shutdown mode. Register contents survive, the panel goes
    /// dark.
    pub fn power_off(&mut self) {
        self.send_command(reg::SHUTDOWN, SHUTDOWN_MODE);
    }

    /// Switch the all-segments-on test mode.
    pub fn set_test_mode(&mut self, on: bool) {
        let data = if on { DISPLAY_TEST_ON } else { DISPLAY_TEST_OFF };
        self.send_command(reg::DISPLAY_TEST, data);
    }
}
