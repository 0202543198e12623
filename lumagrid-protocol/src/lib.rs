//! Lumagrid serial line protocol
//!
//! This crate defines the serial protocol between a host application and
//! the LED panel controller. The protocol is plain ASCII, one command per
//! line, terminated by `\r` or `\n`.
//!
//! # Protocol Overview
//!
//! Two command grammars are recognized:
//!
//! ```text
//! P:<n>:<hex6>:<hex6>:...     palette command, 1 <= n <= 49 colors
//! <r>,<g>,<b>                 single color, decimal, clamped to 0-255
//! ```
//!
//! The controller never writes anything back: malformed lines are dropped
//! without acknowledgment, and prior committed state persists. This is a
//! deliberate best-effort policy for a headless device with no operator
//! feedback channel.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod command;
pub mod line;

pub use color::Rgb;
pub use command::{Command, CommandError, PaletteColors, MAX_PALETTE};
pub use line::{LineAccumulator, RawLine, MAX_LINE_LEN};
