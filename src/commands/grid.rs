//! Grid subcommand handlers

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use webbs::ansi::{decode_grid, encode, encode_to_string, to_cp437};
use webbs::menu::render_menu;
use webbs::{sauce, Config, GridDocument};

use super::read_input;

/// Encode a stored grid document to stdout.
pub fn handle_encode(file: &Path, utf8: bool, prompt: bool) -> Result<()> {
    let config = Config::load()?;
    let json = read_input(file)?;
    let doc: GridDocument = serde_json::from_slice(&json)
        .with_context(|| format!("Invalid grid document {}", file.display()))?;

    let bytes = if prompt {
        let text = render_menu(Some(&doc), doc.height(), &config.menu.prompt);
        if utf8 {
            text.into_bytes()
        } else {
            to_cp437(&text)
        }
    } else if utf8 {
        encode_to_string(&doc).into_bytes()
    } else {
        encode(&doc)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}

/// Decode art into a grid document printed as JSON.
///
/// Dimensions come from the flags, then the SAUCE record, then config.
pub fn handle_decode(file: &Path, width: Option<usize>, height: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    let bytes = read_input(file)?;
    let record = sauce::read(&bytes);

    let width = width
        .or_else(|| record.as_ref().and_then(|r| r.width).map(usize::from))
        .unwrap_or(config.grid.width);
    let height = height
        .or_else(|| record.as_ref().and_then(|r| r.height).map(usize::from))
        .unwrap_or(config.grid.height);

    let doc = decode_grid(sauce::content(&bytes), width, height)?;
    println!("{}", serde_json::to_string(&doc)?);
    Ok(())
}
