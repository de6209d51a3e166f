//! Sauce command handler

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use webbs::sauce::{self, SauceRecord};

use super::read_input;

#[derive(Serialize)]
struct SauceReport<'a> {
    file: &'a Path,
    sauce: Option<SauceRecord>,
    comments: Vec<String>,
}

/// Print the SAUCE record of each file.
pub fn handle(files: &[PathBuf], json: bool) -> Result<()> {
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let bytes = read_input(path)?;
        let record = sauce::read(&bytes);
        let comments = record
            .as_ref()
            .map(|r| sauce::comments(&bytes, r))
            .unwrap_or_default();
        reports.push(SauceReport {
            file: path,
            sauce: record,
            comments,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", describe(report.file, report.sauce.as_ref(), &report.comments));
    }
    Ok(())
}

/// Human-readable summary of one file's metadata.
pub fn describe(path: &Path, record: Option<&SauceRecord>, comments: &[String]) -> String {
    let Some(record) = record else {
        return format!("{}: no SAUCE record\n", path.display());
    };

    let mut out = format!("{}\n", path.display());
    let mut field = |name: &str, value: &str| {
        if !value.is_empty() {
            out.push_str(&format!("  {:<9}{}\n", format!("{}:", name), value));
        }
    };

    field("Title", &record.title);
    field("Author", &record.author);
    field("Group", &record.group);
    let date = match record.date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => record.date_raw.clone(),
    };
    field("Date", &date);
    field(
        "Size",
        &humansize::format_size(record.file_size, humansize::DECIMAL),
    );
    let kind = match record.character_format() {
        Some(format) => format!("{:?} / {:?}", record.data_type, format),
        None => format!("{:?}", record.data_type),
    };
    field("Type", &kind);
    if let (Some(width), Some(height)) = (record.width, record.height) {
        field("Grid", &format!("{}x{}", width, height));
    }
    field("Font", record.font.as_deref().unwrap_or_default());
    if let Some(flags) = record.ansi_flags() {
        field(
            "Flags",
            &format!(
                "ice colors {}, {:?} spacing, {:?} aspect",
                if flags.non_blink { "on" } else { "off" },
                flags.letter_spacing,
                flags.aspect_ratio
            ),
        );
    }
    for comment in comments {
        field("Comment", comment);
    }
    out
}
