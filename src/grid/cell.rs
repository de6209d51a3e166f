//! Grid cells and drawing pens.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One character cell of a menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "char")]
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

impl Default for Cell {
    /// A blank light-gray-on-black cell.
    fn default() -> Self {
        Self::new(' ', Color::DEFAULT_FG, Color::DEFAULT_BG)
    }
}

/// The colors an authoring operation draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pen {
    pub fg: Color,
    pub bg: Color,
}

impl Pen {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// A cell holding `ch` in this pen's colors.
    pub fn cell(self, ch: char) -> Cell {
        Cell::new(ch, self.fg, self.bg)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::DEFAULT_FG, Color::DEFAULT_BG)
    }
}
