//! Board-agnostic core logic for the Lumagrid panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Per-channel color calibration
//! - The two-mode render state (palette blocks / single fill) with its
//!   dirty flag
//! - The block renderer that fills a pixel buffer from the active mode
//! - The byte-stream interpreter tying the serial protocol to the state

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod calibration;
pub mod interp;
pub mod render;
pub mod state;

pub use calibration::ChannelCalibration;
pub use interp::{Feed, Interpreter};
pub use lumagrid_protocol::Rgb;
pub use render::render;
pub use state::{ColorState, RenderMode};
