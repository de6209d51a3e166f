//! View command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use webbs::ansi::{encode_segments, plain_text, AnsiDecoder};
use webbs::sauce;
use webbs::Config;

use super::read_input;

/// Re-emit art as UTF-8 ANSI, or as plain text when piped.
pub fn handle(file: &Path, plain: bool) -> Result<()> {
    let config = Config::load()?;
    let bytes = read_input(file)?;

    let width = sauce::read(&bytes)
        .and_then(|record| record.width)
        .map_or(config.render.wrap_width, usize::from);
    let segments = AnsiDecoder::new(width).decode(sauce::content(&bytes));

    let text = if plain || !atty::is(atty::Stream::Stdout) {
        plain_text(&segments)
    } else {
        encode_segments(&segments)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
