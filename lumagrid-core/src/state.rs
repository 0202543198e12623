//! Committed color state
//!
//! The panel is always in exactly one of two modes: a single full-panel
//! color, or a palette of up to 49 block colors. The mode carries its own
//! data, so a stale palette can never leak into single-color rendering or
//! vice versa. The only transitions are successful command commits.

use lumagrid_protocol::{Command, PaletteColors, Rgb};

use crate::calibration::ChannelCalibration;

/// The active render mode and its committed, calibrated colors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    /// Fill the whole panel with one color
    Single(Rgb),
    /// Divide the panel into contiguous blocks, one per color
    Palette(PaletteColors),
}

/// Committed color state plus the dirty flag
///
/// `dirty` means the committed state differs from what was last pushed to
/// the strip; it is raised atomically with every commit and cleared by
/// the render loop after a push.
#[derive(Debug, Clone)]
pub struct ColorState {
    mode: RenderMode,
    dirty: bool,
    calibration: ChannelCalibration,
}

impl ColorState {
    /// Initial state: single-color black, nothing to render
    pub const fn new(calibration: ChannelCalibration) -> Self {
        Self {
            mode: RenderMode::Single(Rgb::BLACK),
            dirty: false,
            calibration,
        }
    }

    /// The active mode
    pub fn mode(&self) -> &RenderMode {
        &self.mode
    }

    /// Whether committed state is ahead of the last push
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge a completed render/push pass
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Commit a parsed command: calibrate its channels, swap the mode,
    /// raise the dirty flag.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Single(color) => {
                self.mode = RenderMode::Single(self.calibration.apply(color));
            }
            Command::Palette(colors) => {
                let mut calibrated = PaletteColors::new();
                for color in &colors {
                    // Cannot overflow: same capacity as the input
                    let _ = calibrated.push(self.calibration.apply(*color));
                }
                self.mode = RenderMode::Palette(calibrated);
            }
        }
        self.dirty = true;
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(ChannelCalibration::PANEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[Rgb]) -> Command {
        Command::Palette(PaletteColors::from_slice(colors).unwrap())
    }

    #[test]
    fn test_initial_state_is_black_and_clean() {
        let state = ColorState::new(ChannelCalibration::IDENTITY);
        assert_eq!(state.mode(), &RenderMode::Single(Rgb::BLACK));
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_commit_raises_dirty() {
        let mut state = ColorState::new(ChannelCalibration::IDENTITY);
        state.apply(Command::Single(Rgb::new(1, 2, 3)));
        assert!(state.is_dirty());
        state.clear_dirty();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_single_commit_is_calibrated() {
        let mut state = ColorState::new(ChannelCalibration::PANEL);
        state.apply(Command::Single(Rgb::new(100, 200, 50)));
        assert_eq!(state.mode(), &RenderMode::Single(Rgb::new(100, 150, 45)));
    }

    #[test]
    fn test_palette_commit_calibrates_every_entry() {
        let mut state = ColorState::new(ChannelCalibration::PANEL);
        state.apply(palette(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]));
        let RenderMode::Palette(colors) = state.mode() else {
            panic!("expected palette mode");
        };
        assert_eq!(colors[0], Rgb::new(255, 0, 0));
        assert_eq!(colors[1], Rgb::new(0, 191, 0));
    }

    #[test]
    fn test_single_after_palette_leaves_palette_mode() {
        let mut state = ColorState::new(ChannelCalibration::IDENTITY);
        state.apply(palette(&[Rgb::new(1, 1, 1)]));
        state.apply(Command::Single(Rgb::new(9, 9, 9)));
        assert_eq!(state.mode(), &RenderMode::Single(Rgb::new(9, 9, 9)));
    }

    #[test]
    fn test_new_palette_replaces_old_wholesale() {
        let mut state = ColorState::new(ChannelCalibration::IDENTITY);
        state.apply(palette(&[Rgb::new(1, 0, 0), Rgb::new(2, 0, 0), Rgb::new(3, 0, 0)]));
        state.apply(palette(&[Rgb::new(7, 0, 0)]));
        let RenderMode::Palette(colors) = state.mode() else {
            panic!("expected palette mode");
        };
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0], Rgb::new(7, 0, 0));
    }
}
