//! CLI definitions for webbs
//!
//! Lives in the library so the xtask can render man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Version string: package version, plus git SHA and build date on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("WEBBS_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("WEBBS_BUILD_DATE"), ")");

/// WEBBS terminal presentation engine
///
/// Inspect and convert DOS-era ANSI art and menu screens.
#[derive(Parser, Debug)]
#[command(name = "webbs")]
#[command(version = VERSION)]
#[command(about = "WEBBS terminal presentation engine - ANSI art, SAUCE metadata and menu screens")]
#[command(propagate_version = true)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m
  webbs sauce logo.ans              Show SAUCE metadata
  webbs html logo.ans -o preview/   Render art to HTML
  webbs view logo.ans               Display art in a UTF-8 terminal
  webbs grid decode logo.ans        Convert art into a grid document
  webbs grid encode main.json       Encode a grid document as ANSI")]
pub struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show SAUCE metadata of art files
    Sauce {
        /// Art files to inspect
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render art files to HTML
    #[command(long_about = "Render art files to HTML.

SAUCE metadata is stripped, the art is decoded from CP437 and every
color run becomes a styled span. Output files are named after their
input with an .html extension. Several files are rendered in parallel.")]
    Html {
        /// Art files to render
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Wrap column (defaults to render.wrap_width)
        #[arg(long)]
        width: Option<usize>,

        /// CSS font family (defaults to render.font_family)
        #[arg(long)]
        font: Option<String>,

        /// Output directory (defaults to next to each input)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Display an art file in the terminal
    #[command(long_about = "Display an art file in the terminal.

The art is translated from CP437 and re-emitted with ANSI colors. When
stdout is not a terminal, plain text is written instead.")]
    View {
        /// Art file to display
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Always write plain text
        #[arg(long)]
        plain: bool,
    },

    /// Convert between grid documents and ANSI
    #[command(subcommand)]
    Grid(GridCommands),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum GridCommands {
    /// Encode a grid document (JSON) as ANSI
    Encode {
        /// Grid document file
        #[arg(value_name = "GRID")]
        file: PathBuf,

        /// Write UTF-8 text instead of CP437 bytes
        #[arg(long)]
        utf8: bool,

        /// Append the menu input prompt
        #[arg(long)]
        prompt: bool,
    },

    /// Decode an art file into a grid document (JSON)
    Decode {
        /// Art file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Grid width (defaults to SAUCE width, then grid.width)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (defaults to SAUCE height, then grid.height)
        #[arg(long)]
        height: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}
