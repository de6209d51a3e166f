//! Enumerations carried inside a SAUCE record.

use serde::Serialize;

/// The SAUCE `DataType` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SauceDataType {
    None,
    /// Text art laid out on a character grid (ASCII, ANSI, ...).
    Character,
    Bitmap,
    Vector,
    Audio,
    BinaryText,
    XBin,
    Archive,
    Executable,
    Unknown(u8),
}

impl SauceDataType {
    pub fn from_sauce(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Character,
            2 => Self::Bitmap,
            3 => Self::Vector,
            4 => Self::Audio,
            5 => Self::BinaryText,
            6 => Self::XBin,
            7 => Self::Archive,
            8 => Self::Executable,
            other => Self::Unknown(other),
        }
    }

    /// Whether the art has fixed character-cell dimensions.
    pub fn is_character(self) -> bool {
        matches!(self, Self::Character)
    }
}

/// The SAUCE `FileType` byte for character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterFormat {
    Ascii,
    Ansi,
    AnsiMation,
    RipScript,
    PcBoard,
    Avatar,
    Html,
    Source,
    TundraDraw,
    Unknown(u8),
}

impl CharacterFormat {
    pub fn from_sauce(file_type: u8) -> Self {
        match file_type {
            0 => Self::Ascii,
            1 => Self::Ansi,
            2 => Self::AnsiMation,
            3 => Self::RipScript,
            4 => Self::PcBoard,
            5 => Self::Avatar,
            6 => Self::Html,
            7 => Self::Source,
            8 => Self::TundraDraw,
            other => Self::Unknown(other),
        }
    }

    /// Only these formats interpret the ANSI flags byte.
    pub fn supports_flags(self) -> bool {
        matches!(self, Self::Ascii | Self::Ansi | Self::AnsiMation)
    }
}

/// Glyph width the art was drawn for (flags bits 1-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterSpacing {
    Legacy,
    EightPixel,
    NinePixel,
    Reserved,
}

/// Pixel aspect the art was drawn for (flags bits 3-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectRatio {
    Legacy,
    /// Needs vertical stretching on square-pixel displays.
    Stretch,
    Square,
    Reserved,
}

/// Decoded `TFlags` byte for ASCII/ANSI/ANSiMation files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnsiFlags {
    /// Ice colors: the blink bit selects bright backgrounds instead.
    pub non_blink: bool,
    pub letter_spacing: LetterSpacing,
    pub aspect_ratio: AspectRatio,
}

impl AnsiFlags {
    pub fn from_byte(flags: u8) -> Self {
        let letter_spacing = match (flags & 0b0000_0110) >> 1 {
            0 => LetterSpacing::Legacy,
            1 => LetterSpacing::EightPixel,
            2 => LetterSpacing::NinePixel,
            _ => LetterSpacing::Reserved,
        };
        let aspect_ratio = match (flags & 0b0001_1000) >> 3 {
            0 => AspectRatio::Legacy,
            1 => AspectRatio::Stretch,
            2 => AspectRatio::Square,
            _ => AspectRatio::Reserved,
        };
        Self {
            non_blink: flags & 0b0000_0001 != 0,
            letter_spacing,
            aspect_ratio,
        }
    }
}
