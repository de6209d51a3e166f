//! Box drawing glyph sets.

use serde::{Deserialize, Serialize};

/// Line style for [`GridDocument::draw_box`](super::GridDocument::draw_box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxStyle {
    #[default]
    Single,
    Double,
}

/// The glyphs making up one box style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

const SINGLE: BoxGlyphs = BoxGlyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
};

const DOUBLE: BoxGlyphs = BoxGlyphs {
    horizontal: '═',
    vertical: '║',
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
};

impl BoxStyle {
    pub fn glyphs(self) -> &'static BoxGlyphs {
        match self {
            BoxStyle::Single => &SINGLE,
            BoxStyle::Double => &DOUBLE,
        }
    }
}
