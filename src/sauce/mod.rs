//! SAUCE metadata reader.
//!
//! SAUCE (Standard Architecture for Universal Comment Extensions) is a
//! 128-byte record appended to legacy art files:
//!
//! ```text
//! [art bytes][0x1A][COMNT + n*64 bytes][SAUCE00 ... 128 bytes]
//! ```
//!
//! Plain ASCII files usually carry no record, so absence is never an
//! error: every reader here degrades to `None` or an empty result.

mod types;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::codepage;

pub use types::{AnsiFlags, AspectRatio, CharacterFormat, LetterSpacing, SauceDataType};

/// Size of the trailing record.
pub const RECORD_LEN: usize = 128;
/// Size of one comment line in the COMNT block.
pub const COMMENT_LINE_LEN: usize = 64;

const SAUCE_ID: &[u8; 5] = b"SAUCE";
const COMNT_ID: &[u8; 5] = b"COMNT";
/// DOS end-of-file marker separating the art from its metadata.
const EOF_MARKER: u8 = 0x1A;

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 25;

/// A parsed SAUCE record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SauceRecord {
    /// Two-character version, normally `"00"`.
    pub version: String,
    pub title: String,
    pub author: String,
    pub group: String,
    /// The date field as stored (`YYYYMMDD`), trimmed.
    pub date_raw: String,
    /// `date_raw` as a calendar date, when it is one.
    pub date: Option<NaiveDate>,
    /// Original file size excluding the metadata.
    pub file_size: u32,
    pub data_type: SauceDataType,
    pub file_type: u8,
    pub tinfo: [u16; 4],
    pub comment_count: u8,
    pub flags: u8,
    /// Font name from `TInfoS`, for character data.
    pub font: Option<String>,
    /// Columns; only for character data.
    pub width: Option<u16>,
    /// Rows; only for character data.
    pub height: Option<u16>,
}

impl SauceRecord {
    /// Format of character data, `None` for other data types.
    pub fn character_format(&self) -> Option<CharacterFormat> {
        self.data_type
            .is_character()
            .then(|| CharacterFormat::from_sauce(self.file_type))
    }

    /// Rendering flags, for the formats that define them.
    pub fn ansi_flags(&self) -> Option<AnsiFlags> {
        self.character_format()
            .filter(|format| format.supports_flags())
            .map(|_| AnsiFlags::from_byte(self.flags))
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }
}

/// Read the SAUCE record at the end of `bytes`.
///
/// Returns `None` when the buffer is shorter than a record or its last
/// 128 bytes do not start with the `SAUCE` id.
pub fn read(bytes: &[u8]) -> Option<SauceRecord> {
    let tail = record_slice(bytes)?;
    if &tail[0..5] != SAUCE_ID {
        debug!(len = bytes.len(), "no SAUCE id in trailing record");
        return None;
    }

    let date_raw = text_field(&tail[82..90]);
    let data_type = SauceDataType::from_sauce(tail[94]);
    let tinfo = [
        le_u16(&tail[96..98]),
        le_u16(&tail[98..100]),
        le_u16(&tail[100..102]),
        le_u16(&tail[102..104]),
    ];

    let (width, height, font) = if data_type.is_character() {
        let font = text_field(&tail[106..128]);
        (
            Some(non_zero_or(tinfo[0], DEFAULT_WIDTH)),
            Some(non_zero_or(tinfo[1], DEFAULT_HEIGHT)),
            (!font.is_empty()).then_some(font),
        )
    } else {
        (None, None, None)
    };

    Some(SauceRecord {
        version: codepage::decode_str(&tail[5..7]),
        title: text_field(&tail[7..42]),
        author: text_field(&tail[42..62]),
        group: text_field(&tail[62..82]),
        date: parse_date(&date_raw),
        date_raw,
        file_size: u32::from_le_bytes([tail[90], tail[91], tail[92], tail[93]]),
        data_type,
        file_type: tail[95],
        tinfo,
        comment_count: tail[104],
        flags: tail[105],
        font,
        width,
        height,
    })
}

/// Comment lines from the COMNT block preceding the record.
///
/// Empty when the record announces no comments or the block is missing.
pub fn comments(bytes: &[u8], record: &SauceRecord) -> Vec<String> {
    match comment_block_start(bytes, record) {
        Some(start) => bytes[start + COMNT_ID.len()..bytes.len() - RECORD_LEN]
            .chunks(COMMENT_LINE_LEN)
            .map(text_field)
            .collect(),
        None => Vec::new(),
    }
}

/// The art payload with any SAUCE record, COMNT block and EOF marker removed.
pub fn content(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    if let Some(record) = read(bytes) {
        end = comment_block_start(bytes, &record).unwrap_or(bytes.len() - RECORD_LEN);
    }
    let body = &bytes[..end];
    match body.last() {
        Some(&EOF_MARKER) => &body[..end - 1],
        _ => body,
    }
}

fn record_slice(bytes: &[u8]) -> Option<&[u8]> {
    bytes
        .len()
        .checked_sub(RECORD_LEN)
        .map(|start| &bytes[start..])
}

fn comment_block_start(bytes: &[u8], record: &SauceRecord) -> Option<usize> {
    if record.comment_count == 0 {
        return None;
    }
    let block_len = COMNT_ID.len() + COMMENT_LINE_LEN * record.comment_count as usize;
    let start = bytes.len().checked_sub(RECORD_LEN + block_len)?;
    if &bytes[start..start + COMNT_ID.len()] == COMNT_ID {
        Some(start)
    } else {
        debug!(
            expected = record.comment_count,
            "SAUCE announces comments but COMNT block is missing"
        );
        None
    }
}

/// Decode a fixed-width text field, dropping trailing NUL and space padding.
fn text_field(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != 0x00 && b != b' ')
        .map_or(0, |i| i + 1);
    codepage::decode_str(&raw[..end]).trim_end().to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = raw[0..4].parse().ok()?;
    let month = raw[4..6].parse().ok()?;
    let day = raw[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn le_u16(raw: &[u8]) -> u16 {
    u16::from_le_bytes([raw[0], raw[1]])
}

fn non_zero_or(value: u16, default: u16) -> u16 {
    if value == 0 {
        default
    } else {
        value
    }
}

/// Builders for SAUCE-tagged buffers, shared by unit and integration tests.
#[doc(hidden)]
pub mod testing {
    use super::*;

    /// Fields for [`record_bytes`].
    pub struct RecordSpec<'a> {
        pub title: &'a str,
        pub author: &'a str,
        pub group: &'a str,
        pub date: &'a str,
        pub file_size: u32,
        pub data_type: u8,
        pub file_type: u8,
        pub tinfo: [u16; 4],
        pub comment_count: u8,
        pub flags: u8,
        pub font: &'a str,
    }

    impl Default for RecordSpec<'_> {
        fn default() -> Self {
            Self {
                title: "",
                author: "",
                group: "",
                date: "",
                file_size: 0,
                data_type: 1,
                file_type: 1,
                tinfo: [80, 25, 0, 0],
                comment_count: 0,
                flags: 0,
                font: "",
            }
        }
    }

    /// Serialize a 128-byte SAUCE record.
    pub fn record_bytes(spec: &RecordSpec<'_>) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_LEN);
        out.extend_from_slice(SAUCE_ID);
        out.extend_from_slice(b"00");
        padded(&mut out, spec.title, 35);
        padded(&mut out, spec.author, 20);
        padded(&mut out, spec.group, 20);
        padded(&mut out, spec.date, 8);
        out.extend_from_slice(&spec.file_size.to_le_bytes());
        out.push(spec.data_type);
        out.push(spec.file_type);
        for t in spec.tinfo {
            out.extend_from_slice(&t.to_le_bytes());
        }
        out.push(spec.comment_count);
        out.push(spec.flags);
        let font_start = out.len();
        out.extend_from_slice(spec.font.as_bytes());
        out.resize(font_start + 22, 0);
        out
    }

    fn padded(out: &mut Vec<u8>, text: &str, width: usize) {
        let start = out.len();
        out.extend(text.bytes().take(width));
        out.resize(start + width, b' ');
    }
}
