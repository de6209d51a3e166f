//! webbs command-line entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use webbs::cli::{Cli, Commands, ConfigCommands, GridCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    webbs::logging::init(cli.verbose);

    match cli.command {
        Commands::Sauce { files, json } => commands::sauce::handle(&files, json),
        Commands::Html {
            files,
            width,
            font,
            output,
        } => commands::html::handle(&files, width, font, output.as_deref()),
        Commands::View { file, plain } => commands::view::handle(&file, plain),
        Commands::Grid(cmd) => match cmd {
            GridCommands::Encode { file, utf8, prompt } => {
                commands::grid::handle_encode(&file, utf8, prompt)
            }
            GridCommands::Decode {
                file,
                width,
                height,
            } => commands::grid::handle_decode(&file, width, height),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "webbs", &mut std::io::stdout());
            Ok(())
        }
    }
}
