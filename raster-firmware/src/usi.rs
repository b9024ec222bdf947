//! Cycle-exact transmit over the ATtiny's USI
//!
//! The Universal Serial Interface has no clock generator of its own: in
//! three-wire mode, software strobes USITC to toggle the USCK pin and
//! USICLK to advance the shift register. There is no handshake on the
//! wire, so the only timing guarantee the MAX7219 gets is the cadence of
//! the instruction stream itself. The whole byte therefore goes out as
//! one unbroken run of single-cycle `out` instructions inside an
//! interrupt-free section: one USIDR load, sixteen USICR strobes and the
//! USISR clear, 18 cycles, every time.
//!
//! USCK ends up at half the core clock. The chip accepts up to 10 MHz,
//! so anything up to a 20 MHz core keeps the setup/hold times intact.

use core::arch::asm;
use core::convert::Infallible;

use avr_device::attiny85::{PORTB, USI};
use embedded_hal::digital::{ErrorType, OutputPin};
use raster_driver::link::SerialLink;

/// USICR I/O address, for `out`.
const USICR_ADDR: u8 = 0x0D;
/// USISR I/O address, for `out`.
const USISR_ADDR: u8 = 0x0E;
/// USIDR I/O address, for `out`.
const USIDR_ADDR: u8 = 0x0F;

/// Three-wire mode, toggle USCK (USIWM0 | USITC).
const CLOCK_TOGGLE: u8 = 0x11;
/// Same toggle with USICLK set, shifting the register one bit.
const CLOCK_SHIFT: u8 = 0x13;

/// Transmit half of the USI, wired as DO on PB1 and USCK on PB2.
pub struct UsiLink {
    usi: USI,
}

impl UsiLink {
    /// Take ownership of the USI peripheral.
    pub fn new(usi: USI) -> Self {
        Self { usi }
    }
}

impl SerialLink for UsiLink {
    #[inline(always)]
    fn write_byte(&mut self, byte: u8) {
        avr_device::interrupt::free(|_| {
            // SAFETY: raw `out` writes to the USI data, control and
            // status registers this struct has exclusive ownership of;
            // no memory is touched and no flags are clobbered.
            unsafe {
                asm!(
                    "out {usidr}, {byte}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    "out {usicr}, {tick}",
                    "out {usicr}, {tock}",
                    // Counter and flags back to a known state for the
                    // next byte
                    "out {usisr}, {zero}",
                    usidr = const USIDR_ADDR,
                    usicr = const USICR_ADDR,
                    usisr = const USISR_ADDR,
                    byte = in(reg) byte,
                    tick = in(reg) CLOCK_TOGGLE,
                    tock = in(reg) CLOCK_SHIFT,
                    zero = in(reg) 0u8,
                    options(nostack, preserves_flags),
                );
            }
        });
    }

    fn reset(&mut self) {
        self.usi.usisr.write(|w| unsafe { w.bits(0) });
    }
}

/// Chip-select line on PB0.
///
/// The USI never reads DI when it only transmits, so PB0 is free to act
/// as a plain output.
pub struct CsPin {
    port: PORTB,
}

impl CsPin {
    /// Claim the port and set the pin directions and idle levels: PB0,
    /// PB1 and PB2 become outputs, the select line idles high, the
    /// clock low.
    pub fn new(port: PORTB) -> Self {
        port.ddrb
            .modify(|_, w| w.pb0().set_bit().pb1().set_bit().pb2().set_bit());
        port.portb.modify(|_, w| w.pb0().set_bit().pb2().clear_bit());
        Self { port }
    }
}

impl ErrorType for CsPin {
    type Error = Infallible;
}

impl OutputPin for CsPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.port.portb.modify(|_, w| w.pb0().set_bit());
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.port.portb.modify(|_, w| w.pb0().clear_bit());
        Ok(())
    }
}
