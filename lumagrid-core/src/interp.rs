//! Serial byte-stream interpreter
//!
//! Glues the protocol crate to the color state: bytes go in one at a
//! time, completed lines are classified and parsed, successful commands
//! are committed. Parsing never touches the strip; the render loop picks
//! up committed state through the dirty flag.

use lumagrid_protocol::{Command, CommandError, LineAccumulator};

use crate::calibration::ChannelCalibration;
use crate::state::ColorState;

/// Outcome of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feed {
    /// Byte accumulated, line not yet complete
    Pending,
    /// Line completed and its command committed
    Dispatched,
    /// Line completed but rejected; state unchanged
    Ignored(CommandError),
}

/// Line accumulator plus committed color state
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    accumulator: LineAccumulator,
    state: ColorState,
}

impl Interpreter {
    /// Create an interpreter with the given channel calibration
    pub const fn new(calibration: ChannelCalibration) -> Self {
        Self {
            accumulator: LineAccumulator::new(),
            state: ColorState::new(calibration),
        }
    }

    /// The committed color state
    pub fn state(&self) -> &ColorState {
        &self.state
    }

    /// Mutable access for the render loop's dirty-flag handshake
    pub fn state_mut(&mut self) -> &mut ColorState {
        &mut self.state
    }

    /// Feed one serial byte
    pub fn feed(&mut self, byte: u8) -> Feed {
        let Some(line) = self.accumulator.feed(byte) else {
            return Feed::Pending;
        };

        match Command::parse(&line) {
            Ok(command) => {
                self.state.apply(command);
                Feed::Dispatched
            }
            Err(e) => Feed::Ignored(e),
        }
    }

    /// Feed a whole buffer of serial bytes, returning how many lines
    /// were dispatched.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut dispatched = 0;
        for &byte in bytes {
            if self.feed(byte) == Feed::Dispatched {
                dispatched += 1;
            }
        }
        dispatched
    }
}
