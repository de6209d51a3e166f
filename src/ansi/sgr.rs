//! SGR (Select Graphic Rendition) handling.
//!
//! Handles the CSI `m` parameters used by legacy art:
//! - Reset (0)
//! - Bold on/off (1, 22)
//! - Blink on/off (5, 25)
//! - Foreground/background colors (30-37, 40-47)
//! - Bright foreground/background colors (90-97, 100-107)
//!
//! Anything else is ignored.

use tracing::trace;

use super::types::RunStyle;
use crate::color::Color;

/// Graphic attributes carried across a decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicState {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub blink: bool,
}

impl Default for GraphicState {
    fn default() -> Self {
        Self {
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            bold: false,
            blink: false,
        }
    }
}

impl GraphicState {
    /// Apply SGR parameters in order.
    pub fn apply(&mut self, params: &[u16]) {
        for &code in params {
            match code {
                0 => *self = Self::default(),
                1 => self.bold = true,
                22 => self.bold = false,
                5 => self.blink = true,
                25 => self.blink = false,
                30..=37 => self.fg = palette(code - 30),
                90..=97 => self.fg = palette(code - 90 + 8),
                40..=47 => self.bg = palette(code - 40),
                100..=107 => self.bg = palette(code - 100 + 8),
                other => trace!(code = other, "ignoring SGR parameter"),
            }
        }
    }

    /// Foreground as displayed: bold promotes normal colors to bright.
    pub fn effective_fg(&self) -> Color {
        if self.bold {
            self.fg.brighten()
        } else {
            self.fg
        }
    }

    /// The style a character printed now would carry.
    pub fn run_style(&self) -> RunStyle {
        RunStyle {
            fg: self.effective_fg(),
            bg: self.bg,
            bold: self.bold,
            blink: self.blink,
        }
    }
}

fn palette(index: u16) -> Color {
    // Callers only pass 0..=15.
    Color::from_index(index as u8).unwrap_or(Color::DEFAULT_FG)
}
