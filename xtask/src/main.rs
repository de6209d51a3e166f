//! Development tasks for webbs
//!
//! Usage: `cargo run -p xtask -- <task>`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use webbs::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for webbs and its subcommands
    Man {
        /// Output directory
        #[arg(short, long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let cmd = Cli::command();
    write_page(&cmd, "webbs", out)?;
    for sub in cmd.get_subcommands() {
        let name = format!("webbs-{}", sub.get_name());
        write_page(sub, &name, out)?;
    }
    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(cmd: &clap::Command, name: &str, out: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).title(name).render(&mut buffer)?;
    let path = out.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
