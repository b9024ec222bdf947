//! Matrix display: framebuffer glued to the chip
//!
//! [`MatrixDisplay`] pairs a [`Frame`] with a [`Max7219`] and keeps the
//! two in step. Under the default [`FlushPolicy::Immediate`] every
//! mutation is followed by a full eight-row push, so the panel always
//! shows the frame. [`FlushPolicy::Manual`] holds pushes back until
//! [`MatrixDisplay::update`] is called, which lets a caller compose
//! several operations and refresh the panel once.
//!
//! Everything here is synchronous and runs on the caller's thread of
//! control; operations land on the panel strictly in call order.

use embedded_hal::digital::OutputPin;
use raster_core::{Frame, SIZE};

use crate::link::SerialLink;
use crate::max7219::{Max7219, INTENSITY_MID};

/// When framebuffer changes are pushed to the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlushPolicy {
    /// Push all eight rows after every mutation.
    #[default]
    Immediate,
    /// Only push on an explicit [`MatrixDisplay::update`].
    Manual,
}

/// Display configuration, resolved once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Brightness step (0-15) applied during [`MatrixDisplay::init`].
    pub intensity: u8,
    /// Push policy.
    pub flush: FlushPolicy,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            intensity: INTENSITY_MID,
            flush: FlushPolicy::Immediate,
        }
    }
}

/// An 8x8 LED matrix: one frame, one chip, one push policy.
pub struct MatrixDisplay<L, CS> {
    frame: Frame,
    chip: Max7219<L, CS>,
    config: MatrixConfig,
}

impl<L: SerialLink, CS: OutputPin> MatrixDisplay<L, CS> {
    /// Build a display over a serial link and chip-select pin. The frame
    /// starts out dark; call [`init`](Self::init) before first use.
    pub fn new(link: L, cs: CS, config: MatrixConfig) -> Self {
        Self {
            frame: Frame::new(),
            chip: Max7219::new(link, cs),
            config,
        }
    }

    /// Initialize the chip and blank the panel.
    ///
    /// The digit registers hold garbage at power-up, so after the chip's
    /// own init sequence the zeroed frame is pushed once, whatever the
    /// flush policy.
    pub fn init(&mut self) {
        self.chip.init();
        if self.config.intensity != INTENSITY_MID {
            self.chip.set_intensity(self.config.intensity);
        }
        self.update();
    }

    /// Unconditionally push all eight rows, row 0 first.
    pub fn update(&mut self) {
        for (row, value) in self.frame.rows().into_iter().enumerate() {
            self.chip.write_row(row as u8, value);
        }
    }

    fn sync(&mut self) {
        if self.config.flush == FlushPolicy::Immediate {
            self.update();
        }
    }

    /// Read access to the current frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Whether the pixel at (row, col) is lit.
    pub fn pixel(&self, row: u8, col: u8) -> bool {
        self.frame.pixel(row, col)
    }

    /// One row byte of the current frame.
    pub fn row(&self, row: u8) -> u8 {
        self.frame.row(row)
    }

    /// Light or darken one pixel.
    pub fn set_pixel(&mut self, row: u8, col: u8, on: bool) {
        self.frame.set_pixel(row, col, on);
        self.sync();
    }

    /// Light one pixel.
    pub fn activate_pixel(&mut self, row: u8, col: u8) {
        self.frame.activate_pixel(row, col);
        self.sync();
    }

    /// Darken one pixel.
    pub fn clear_pixel(&mut self, row: u8, col: u8) {
        self.frame.clear_pixel(row, col);
        self.sync();
    }

    /// Replace one row.
    pub fn set_row(&mut self, row: u8, value: u8) {
        self.frame.set_row(row, value);
        self.sync();
    }

    /// Scatter a byte down one column, msb to row 0.
    pub fn set_col(&mut self, col: u8, value: u8) {
        self.frame.set_col(col, value);
        self.sync();
    }

    /// Replace all eight rows.
    pub fn set_rows(&mut self, rows: [u8; SIZE]) {
        self.frame.set_rows(rows);
        self.sync();
    }

    /// Replace the frame from a packed 64-bit image.
    pub fn set_u64(&mut self, bits: u64) {
        self.frame.set_u64(bits);
        self.sync();
    }

    /// Shift every row one column left, zero fill.
    pub fn shift_left(&mut self) {
        self.frame.shift_left();
        self.sync();
    }

    /// Shift every row one column right, zero fill.
    pub fn shift_right(&mut self) {
        self.frame.shift_right();
        self.sync();
    }

    /// Rotate every row one column left.
    pub fn shift_left_circular(&mut self) {
        self.frame.shift_left_circular();
        self.sync();
    }

    /// Rotate every row one column right.
    pub fn shift_right_circular(&mut self) {
        self.frame.shift_right_circular();
        self.sync();
    }

    /// Invert every pixel.
    pub fn invert(&mut self) {
        self.frame.invert();
        self.sync();
    }

    /// Rotate the image 90 degrees counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.frame.rotate_left();
        self.sync();
    }

    /// Rotate the image 90 degrees clockwise.
    pub fn rotate_right(&mut self) {
        self.frame.rotate_right();
        self.sync();
    }

    /// Mirror the image top-to-bottom.
    pub fn flip_horizontal(&mut self) {
        self.frame.flip_horizontal();
        self.sync();
    }

    /// Mirror the image left-to-right.
    pub fn flip_vertical(&mut self) {
        self.frame.flip_vertical();
        self.sync();
    }

    /// Darken the whole panel.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.sync();
    }

    /// Write a raw chip register; does not touch the frame.
    pub fn send_command(&mut self, address: u8, data: u8) {
        self.chip.send_command(address, data);
    }

    /// Set the chip's brightness directly; does not touch the frame.
    pub fn set_intensity(&mut self, level: u8) {
        self.chip.set_intensity(level);
    }

    /// Wake the panel from shutdown.
    pub fn power_on(&mut self) {
        self.chip.power_on();
    }

    /// Put the panel into shutdown; the frame is kept.
    pub fn power_off(&mut self) {
        self.chip.power_off();
    }
}
