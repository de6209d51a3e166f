//! The 16-color DOS palette.
//!
//! Every cell and styled run in the engine carries colors as a [`Color`].
//! Indices 0-7 are the normal-intensity hues, 8-15 the bright variants of
//! the same hues in the same order.

use serde::{Deserialize, Serialize};

/// One of the 16 legacy text-mode colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Color {
    Black,
    Red,
    Green,
    /// Rendered as brown by VGA hardware.
    Yellow,
    Blue,
    Magenta,
    Cyan,
    /// Light gray, the default foreground.
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

const ALL: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

/// CSS colors matching the VGA text-mode palette.
const CSS: [&str; 16] = [
    "#000000", "#aa0000", "#00aa00", "#aa5500", "#0000aa", "#aa00aa", "#00aaaa", "#aaaaaa",
    "#555555", "#ff5555", "#55ff55", "#ffff55", "#5555ff", "#ff55ff", "#55ffff", "#ffffff",
];

impl Color {
    /// Default foreground (light gray).
    pub const DEFAULT_FG: Color = Color::White;
    /// Default background (black).
    pub const DEFAULT_BG: Color = Color::Black;

    /// Look up a color by palette index. `None` for indices above 15.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL.get(index as usize).copied()
    }

    /// Palette index in `0..=15`.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// The bright variant of a normal color; bright colors are returned unchanged.
    pub fn brighten(self) -> Self {
        if self.is_bright() {
            self
        } else {
            ALL[self.index() as usize + 8]
        }
    }

    /// CSS hex value used by the HTML renderer.
    pub fn css(self) -> &'static str {
        CSS[self.index() as usize]
    }

    /// SGR parameter selecting this color as foreground (30-37, 90-97).
    pub fn sgr_fg(self) -> u8 {
        if self.is_bright() {
            90 + self.index() - 8
        } else {
            30 + self.index()
        }
    }

    /// SGR parameter selecting this color as background (40-47, 100-107).
    pub fn sgr_bg(self) -> u8 {
        if self.is_bright() {
            100 + self.index() - 8
        } else {
            40 + self.index()
        }
    }
}

/// Error for palette indices outside `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("color index {0} is outside the 16-color palette")]
pub struct InvalidColor(pub u8);

impl TryFrom<u8> for Color {
    type Error = InvalidColor;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Color::from_index(value).ok_or(InvalidColor(value))
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.index()
    }
}
