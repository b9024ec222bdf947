//! MAX7219 LED matrix driver
//!
//! This crate provides the hardware-facing half of the Raster stack:
//!
//! - [`link::SerialLink`]: the narrow byte-transmit primitive the chip is
//!   written through, with a portable GPIO bit-bang implementation
//! - [`max7219::Max7219`]: the chip's register map, command framing and
//!   power-up sequence
//! - [`matrix::MatrixDisplay`]: a [`raster_core::Frame`] glued to the chip,
//!   with the configurable push-on-mutation policy
//!
//! The link is unidirectional and unacknowledged, so every operation in
//! this crate is infallible; a wiring or timing fault is simply not
//! observable from the host side. Platform crates that need exact transmit
//! timing (the ATtiny USI backend in `raster-firmware`) implement
//! [`link::SerialLink`] themselves.

#![no_std]
#![deny(unsafe_code)]

pub mod link;
pub mod matrix;
pub mod max7219;

pub use link::{BitBangLink, SerialLink};
pub use matrix::{FlushPolicy, MatrixConfig, MatrixDisplay};
pub use max7219::Max7219;
