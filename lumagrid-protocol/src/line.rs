//! Bounded line accumulation for the serial input stream.
//!
//! Bytes arrive one at a time from the UART and are collected into a
//! fixed-capacity buffer until a `\r` or `\n` terminator. Lines longer
//! than the buffer are truncated: excess bytes are dropped without any
//! error signaling. This is an accepted data-loss policy, not a protocol
//! error - the device has no channel to report one on anyway.

use heapless::Vec;

/// Maximum usable line length in bytes; input beyond this is dropped
/// until the next terminator.
pub const MAX_LINE_LEN: usize = 510;

/// A completed input line, without its terminator
pub type RawLine = Vec<u8, MAX_LINE_LEN>;

/// Accumulates serial bytes into terminator-delimited lines
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator {
    buffer: RawLine,
}

impl LineAccumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Number of bytes accumulated so far in the current line
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the current line is still empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discard the current partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Feed a single byte
    ///
    /// Returns `Some(line)` when a terminator completes a non-empty line;
    /// the accumulator is reset afterwards. A terminator on an empty line
    /// (e.g. the `\n` of a `\r\n` pair) yields nothing. Bytes past
    /// [`MAX_LINE_LEN`] are silently discarded.
    pub fn feed(&mut self, byte: u8) -> Option<RawLine> {
        match byte {
            b'\r' | b'\n' => {
                if self.buffer.is_empty() {
                    return None;
                }
                let line = self.buffer.clone();
                self.buffer.clear();
                Some(line)
            }
            _ => {
                // Over-capacity bytes are dropped, keeping the first
                // MAX_LINE_LEN bytes of the line.
                let _ = self.buffer.push(byte);
                None
            }
        }
    }
}
