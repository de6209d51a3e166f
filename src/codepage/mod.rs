//! Byte to display-character mapping for DOS-era art.
//!
//! Legacy ANSI and ASCII art is stored as raw code page 437 bytes. The
//! decoder maps each byte through [`to_char`]; the encoder maps grid
//! characters back through [`to_byte`].

mod cp437;

use cp437::TABLE;

/// Bytes the decoder treats as control input rather than glyphs.
const CONTROL_BYTES: [u8; 3] = [0x0A, 0x0D, 0x1B];

/// Translate a code page 437 byte to its display character.
pub fn to_char(byte: u8) -> char {
    TABLE[byte as usize]
}

/// Translate a display character back to its code page 437 byte.
///
/// Printable ASCII maps to itself. Characters with no CP437 glyph return
/// `None`. The blank at 0x00 never wins over the real space at 0x20.
pub fn to_byte(ch: char) -> Option<u8> {
    if (' '..='~').contains(&ch) {
        return Some(ch as u8);
    }
    TABLE
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, &glyph)| glyph == ch)
        .map(|(byte, _)| byte as u8)
}

/// Whether a character survives an encode/decode cycle unchanged.
///
/// True for every glyph in the table except those whose byte the decoder
/// interprets as a line feed, carriage return or escape.
pub fn is_printable(ch: char) -> bool {
    to_byte(ch).is_some_and(|b| !CONTROL_BYTES.contains(&b))
}

/// Decode a whole CP437 buffer into a string, glyph for glyph.
pub fn decode_str(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| to_char(b)).collect()
}
