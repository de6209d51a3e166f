//! Byte-stream decoder for legacy ANSI art.
//!
//! Scans CP437 bytes, tracking SGR state, and produces styled runs with
//! explicit line breaks. Cursor positioning, erase and mode sequences are
//! consumed without being interpreted: this is not a terminal emulator.

use tracing::{debug, trace};

use super::sgr::GraphicState;
use super::types::{RunStyle, Segment, StyledRun};
use crate::codepage;

const ESC: u8 = 0x1B;
const LF: u8 = 0x0A;
const CR: u8 = 0x0D;

/// Default column count after which a line break is forced.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Decodes ANSI art into [`Segment`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiDecoder {
    wrap_width: usize,
}

impl Default for AnsiDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_WIDTH)
    }
}

impl AnsiDecoder {
    /// Create a decoder that wraps after `wrap_width` columns.
    ///
    /// A width of zero disables wrapping.
    pub fn new(wrap_width: usize) -> Self {
        Self { wrap_width }
    }

    pub fn decode(&self, bytes: &[u8]) -> Vec<Segment> {
        let mut out = SegmentWriter::new(self.wrap_width);
        let mut state = GraphicState::default();
        let mut i = 0;

        while i < bytes.len() {
            let byte = bytes[i];
            match byte {
                ESC if bytes.get(i + 1) == Some(&b'[') => {
                    let (consumed, sequence) = parse_csi(&bytes[i + 2..]);
                    i += 2 + consumed;
                    match sequence {
                        Some(Csi { private: false, final_byte: b'm', params }) => {
                            state.apply(&params)
                        }
                        Some(csi) => trace!(
                            final_byte = %(csi.final_byte as char),
                            "skipping control sequence"
                        ),
                        None => debug!(offset = i, "abandoned malformed control sequence"),
                    }
                    continue;
                }
                LF => out.line_break(),
                CR => {}
                _ => out.push(codepage::to_char(byte), state.run_style()),
            }
            i += 1;
        }

        out.finish()
    }
}

/// A parsed CSI sequence.
#[derive(Debug, PartialEq, Eq)]
struct Csi {
    params: Vec<u16>,
    /// Private-mode marker (`?`, `<`, `=`, `>`) was present.
    private: bool,
    final_byte: u8,
}

/// Parse the body of a CSI sequence (after `ESC [`).
///
/// Returns the number of bytes consumed and the sequence, or `None` when
/// the sequence is malformed or truncated. Bytes consumed by an abandoned
/// attempt are not re-emitted as text.
fn parse_csi(bytes: &[u8]) -> (usize, Option<Csi>) {
    let mut params = Vec::new();
    let mut current: Option<u16> = None;
    let mut private = false;

    for (idx, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {
                let digit = u16::from(b - b'0');
                current = Some(current.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            }
            b';' => params.push(current.take().unwrap_or(0)),
            b'<'..=b'?' => private = true,
            // Intermediate bytes
            0x20..=0x2F => {}
            0x40..=0x7E => {
                params.push(current.unwrap_or(0));
                let csi = Csi {
                    params,
                    private,
                    final_byte: b,
                };
                return (idx + 1, Some(csi));
            }
            _ => return (idx + 1, None),
        }
    }

    (bytes.len(), None)
}

/// Accumulates characters into runs and enforces the wrap width.
struct SegmentWriter {
    segments: Vec<Segment>,
    current: Option<StyledRun>,
    column: usize,
    wrap_width: usize,
}

impl SegmentWriter {
    fn new(wrap_width: usize) -> Self {
        Self {
            segments: Vec::new(),
            current: None,
            column: 0,
            wrap_width,
        }
    }

    fn push(&mut self, ch: char, style: RunStyle) {
        match &mut self.current {
            Some(run) if run.style() == style => run.text.push(ch),
            _ => {
                self.flush();
                let mut run = StyledRun::empty(style);
                run.text.push(ch);
                self.current = Some(run);
            }
        }

        self.column += 1;
        if self.wrap_width > 0 && self.column >= self.wrap_width {
            self.line_break();
        }
    }

    fn line_break(&mut self) {
        self.flush();
        self.segments.push(Segment::LineBreak);
        self.column = 0;
    }

    fn flush(&mut self) {
        if let Some(run) = self.current.take() {
            self.segments.push(Segment::Run(run));
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush();
        self.segments
    }
}
