//! Subcommand handlers for the webbs binary

pub mod config;
pub mod grid;
pub mod html;
pub mod sauce;
pub mod view;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read an input file, with a clear error when it does not exist.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
