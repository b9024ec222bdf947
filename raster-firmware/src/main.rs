//! Raster firmware for the ATtiny85
//!
//! Drives a single MAX7219 8x8 LED matrix over the USI in three-wire
//! mode. Wiring:
//!
//! - PB0: LOAD/CS
//! - PB1: DO -> DIN
//! - PB2: USCK -> CLK
//!
//! The timing-critical transmit path lives in [`usi`]; everything above
//! it is the portable driver stack.

#![no_std]
#![no_main]
#![feature(asm_experimental_arch)]

mod usi;

use panic_halt as _;

use avr_device::attiny85::Peripherals;
use raster_driver::matrix::{MatrixConfig, MatrixDisplay};

use crate::usi::{CsPin, UsiLink};

/// One lit diagonal; rotating it makes a barber-pole sweep.
const PATTERN: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// Animation tick, in busy-wait iterations.
const TICK: u32 = 20_000;

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    let cs = CsPin::new(dp.PORTB);
    let link = UsiLink::new(dp.USI);

    let mut display = MatrixDisplay::new(link, cs, MatrixConfig::default());
    display.init();

    display.set_rows(PATTERN);
    loop {
        delay(TICK);
        display.shift_left_circular();
    }
}

/// Crude busy-wait; precise enough for an animation tick.
fn delay(count: u32) {
    for _ in 0..count {
        avr_device::asm::nop();
    }
}
