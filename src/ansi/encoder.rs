//! ANSI serialization of grid documents.
//!
//! The inverse of [`AnsiDecoder`](super::AnsiDecoder): a grid is written
//! as a clear-screen, one cursor-position sequence per row, and the row's
//! characters, with an SGR color change only where the color differs from
//! the previously written cell.

use crate::codepage;
use crate::color::Color;
use crate::grid::GridDocument;

use super::types::Segment;

/// Substitute for characters the transport cannot carry.
const REPLACEMENT: char = '?';

/// Append `ESC[2J ESC[H`.
pub fn push_clear_screen(buf: &mut String) {
    buf.push_str("\x1b[2J\x1b[H");
}

/// Append a cursor move to 1-based column `x`, row `y`.
pub fn push_move_cursor(buf: &mut String, x: usize, y: usize) {
    buf.push_str("\x1b[");
    buf.push_str(&y.to_string());
    buf.push(';');
    buf.push_str(&x.to_string());
    buf.push('H');
}

/// Append an SGR selecting `fg` and, when given, `bg`.
pub fn push_color(buf: &mut String, fg: Color, bg: Option<Color>) {
    buf.push_str("\x1b[");
    buf.push_str(&fg.sgr_fg().to_string());
    if let Some(bg) = bg {
        buf.push(';');
        buf.push_str(&bg.sgr_bg().to_string());
    }
    buf.push('m');
}

/// Append the attribute reset `ESC[0m`.
pub fn push_reset(buf: &mut String) {
    buf.push_str("\x1b[0m");
}

pub fn push_hide_cursor(buf: &mut String) {
    buf.push_str("\x1b[?25l");
}

pub fn push_show_cursor(buf: &mut String) {
    buf.push_str("\x1b[?25h");
}

/// Serialize a grid as CP437 bytes, the decoder's input alphabet.
///
/// Characters with no code page glyph are written as `?`.
pub fn encode(doc: &GridDocument) -> Vec<u8> {
    to_cp437(&encode_to_string(doc))
}

/// Convert encoder text to CP437 bytes.
///
/// ASCII, escape sequences included, passes through unchanged.
pub fn to_cp437(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            if ch.is_ascii() {
                ch as u8
            } else {
                codepage::to_byte(ch).unwrap_or(REPLACEMENT as u8)
            }
        })
        .collect()
}

/// Serialize a grid as Unicode text for a UTF-8 terminal transport.
pub fn encode_to_string(doc: &GridDocument) -> String {
    // Roughly one byte per cell plus escapes for color changes.
    let capacity = doc.width().saturating_mul(doc.height()).saturating_mul(2);
    let mut out = String::with_capacity(capacity);
    push_clear_screen(&mut out);

    let mut last: Option<(Color, Color)> = None;
    for (y, row) in doc.rows().enumerate() {
        push_move_cursor(&mut out, 1, y + 1);
        for cell in row {
            let colors = (cell.fg, cell.bg);
            if last != Some(colors) {
                push_color(&mut out, cell.fg, Some(cell.bg));
                last = Some(colors);
            }
            out.push(transport_char(cell.ch));
        }
    }

    push_reset(&mut out);
    out
}

/// Re-emit decoded output as ANSI text, one SGR per run.
///
/// Used to replay art on a UTF-8 terminal after CP437 translation.
pub fn encode_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Run(run) => {
                out.push_str("\x1b[0;");
                if run.blink {
                    out.push_str("5;");
                }
                out.push_str(&run.fg.sgr_fg().to_string());
                out.push(';');
                out.push_str(&run.bg.sgr_bg().to_string());
                out.push('m');
                out.extend(run.text.chars().map(transport_char));
            }
            Segment::LineBreak => {
                push_reset(&mut out);
                out.push_str("\r\n");
            }
        }
    }
    push_reset(&mut out);
    out
}

/// Control characters would be interpreted by the client.
fn transport_char(ch: char) -> char {
    if ch.is_control() {
        REPLACEMENT
    } else {
        ch
    }
}
