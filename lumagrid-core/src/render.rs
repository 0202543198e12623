//! Frame rendering
//!
//! Renders the committed mode into a pixel buffer, overwriting it
//! wholesale. Palette mode partitions the buffer into one contiguous
//! block per color; integer division leaves any remainder pixels in the
//! last block.

use crate::state::RenderMode;
use lumagrid_protocol::Rgb;

/// Fill `pixels` from the active mode.
///
/// With k palette colors over n pixels, pixel i takes color
/// `min(i / (n / k), k - 1)`. A palette larger than the buffer degrades
/// to one pixel per color, with trailing colors unused.
pub fn render(mode: &RenderMode, pixels: &mut [Rgb]) {
    match mode {
        RenderMode::Single(color) => pixels.fill(*color),
        RenderMode::Palette(colors) => {
            if colors.is_empty() {
                return;
            }
            let block = (pixels.len() / colors.len()).max(1);
            for (i, pixel) in pixels.iter_mut().enumerate() {
                let idx = (i / block).min(colors.len() - 1);
                *pixel = colors[idx];
            }
        }
    }
}
