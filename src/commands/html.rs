//! Html command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use webbs::html::{ansi_to_html, HtmlOptions};
use webbs::Config;

use super::read_input;

/// Render each file next to itself, or into `output` when given.
pub fn handle(
    files: &[PathBuf],
    width: Option<usize>,
    font: Option<String>,
    output: Option<&Path>,
) -> Result<()> {
    let config = Config::load()?;
    let mut options = config.render.html_options();
    if let Some(width) = width {
        options.width = width;
    }
    if let Some(font) = font {
        options.font_family = font;
    }

    if let Some(dir) = output {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let written: Vec<PathBuf> = files
        .par_iter()
        .map(|path| render_file(path, output, &options))
        .collect::<Result<_>>()?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn render_file(path: &Path, output: Option<&Path>, options: &HtmlOptions) -> Result<PathBuf> {
    let bytes = read_input(path)?;
    let html = ansi_to_html(&bytes, options);
    let target = output_path(path, output);
    fs::write(&target, html).with_context(|| format!("Failed to write {}", target.display()))?;
    info!(input = %path.display(), output = %target.display(), "rendered");
    Ok(target)
}

/// `<dir>/<stem>.html`, where `dir` defaults to the input's directory.
pub fn output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    let name = input.with_extension("html");
    match (output, name.file_name()) {
        (Some(dir), Some(file_name)) => dir.join(file_name),
        _ => name,
    }
}
