//! ANSI escape-sequence decoding and encoding.
//!
//! Only the subset used by DOS-era art and by this crate's own encoder is
//! understood:
//! - decoder: interprets SGR, skips every other CSI sequence
//! - encoder: clear screen, per-row cursor positioning, minimal SGR
//!
//! Cursor positioning is emitted but never interpreted, so a grid survives
//! an encode/decode cycle only because the decoder wraps at the grid width.

mod decoder;
mod encoder;
mod sgr;
mod types;

pub use decoder::{AnsiDecoder, DEFAULT_WRAP_WIDTH};
pub use encoder::{
    encode, encode_segments, encode_to_string, push_clear_screen, push_color, push_hide_cursor,
    push_move_cursor, push_reset, push_show_cursor, to_cp437,
};
pub use sgr::GraphicState;
pub use types::{plain_text, RunStyle, Segment, StyledRun};

use crate::grid::{Cell, GridDocument, GridError};

/// Decode art onto a fresh `width` x `height` grid.
///
/// Lines advance on every line break; characters past the right or bottom
/// edge are dropped.
pub fn decode_grid(bytes: &[u8], width: usize, height: usize) -> Result<GridDocument, GridError> {
    let mut doc = GridDocument::new(width, height)?;
    let segments = AnsiDecoder::new(width).decode(bytes);
    paint(&mut doc, &segments);
    Ok(doc)
}

/// Paint decoded segments onto `doc` starting at its top-left cell.
pub fn paint(doc: &mut GridDocument, segments: &[Segment]) {
    let (mut x, mut y) = (0usize, 0usize);
    for segment in segments {
        match segment {
            Segment::Run(run) => {
                for ch in run.text.chars() {
                    doc.put(x, y, Cell::new(ch, run.fg, run.bg));
                    x += 1;
                }
            }
            Segment::LineBreak => {
                x = 0;
                y += 1;
            }
        }
    }
}
