//! Board-agnostic model for an 8x8 LED dot matrix
//!
//! This crate contains the in-memory state of the display and every
//! geometric operation on it, with no hardware dependencies:
//!
//! - [`Frame`]: 8x8 one-bit-per-pixel framebuffer
//! - Pixel, row, column and bulk mutators
//! - Shifts, rotations, flips and inversion
//!
//! Pushing a frame to actual hardware is the job of `raster-driver`.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;

pub use frame::{Frame, SIZE};
