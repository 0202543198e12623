//! Compile-time panel configuration
//!
//! There is no runtime or persisted configuration; edit these constants
//! and rebuild to retarget other panels.

/// Panel pixel count (8x32 matrix)
pub const NUM_LEDS: usize = 256;

/// Global brightness ceiling, 0-255. Keeps the panel within its supply's
/// power budget.
pub const BRIGHTNESS: u8 = 40;

/// Per-channel color correction (typical WS2812B strip profile)
pub const COLOR_CORRECTION: (u8, u8, u8) = (255, 176, 240);

/// Host UART baud rate
pub const SERIAL_BAUD: u32 = 115_200;

/// Per-read wait bound during the input drain phase, in milliseconds
pub const READ_TIMEOUT_MS: u64 = 5;
