//! Per-channel color calibration
//!
//! The panel's green and blue channels run hot relative to red, so every
//! committed channel value is scaled by a fixed factor before it reaches
//! the pixel buffer. Factors are stored as value x 100 to keep the math
//! in integers; `apply` truncates, matching the original hardware's
//! behavior of `(int)(channel * factor)`.

use lumagrid_protocol::Rgb;

/// Fixed per-channel scaling factors, stored as value x 100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelCalibration {
    /// Red factor x 100
    pub red_x100: u16,
    /// Green factor x 100
    pub green_x100: u16,
    /// Blue factor x 100
    pub blue_x100: u16,
}

impl ChannelCalibration {
    /// Empirical factors for the LOEFL1RGB/6024 panel (1.00, 0.75, 0.90)
    pub const PANEL: ChannelCalibration = ChannelCalibration::new(100, 75, 90);

    /// No scaling on any channel
    pub const IDENTITY: ChannelCalibration = ChannelCalibration::new(100, 100, 100);

    /// Create a calibration from x100 factors
    pub const fn new(red_x100: u16, green_x100: u16, blue_x100: u16) -> Self {
        Self {
            red_x100,
            green_x100,
            blue_x100,
        }
    }

    /// Scale all three channels, truncating toward zero
    pub const fn apply(&self, color: Rgb) -> Rgb {
        Rgb::new(
            scale(color.r, self.red_x100),
            scale(color.g, self.green_x100),
            scale(color.b, self.blue_x100),
        )
    }
}

impl Default for ChannelCalibration {
    fn default() -> Self {
        Self::PANEL
    }
}

/// `channel * factor_x100 / 100`, truncated. 255 * 100 fits in u16 with
/// room to spare, so the intermediate cannot overflow u32.
const fn scale(channel: u8, factor_x100: u16) -> u8 {
    (channel as u32 * factor_x100 as u32 / 100) as u8
}
