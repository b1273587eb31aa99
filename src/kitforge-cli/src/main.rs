mod cli;
mod commands;
mod kit_file;

use anyhow::Result;
use clap::Parser;

use cli::{CatalogCommand, Cli, Commands, ExportCommand};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { command } => match command {
            CatalogCommand::Items { version, json } => {
                commands::catalog::items(&cli.data_dir, &version, json)?;
            }
            CatalogCommand::Enchantments { version, json } => {
                commands::catalog::enchantments(&cli.data_dir, &version, json)?;
            }
        },

        Commands::Check { kit } => {
            commands::check::run(&cli.data_dir, &kit)?;
        }

        Commands::Export { command } => match command {
            ExportCommand::Nbt { kit, output } => {
                commands::export::nbt(&cli.data_dir, &kit, &output)?;
            }
            ExportCommand::Command { kit } => {
                commands::export::command(&cli.data_dir, &kit)?;
            }
        },

        Commands::Verify { kit } => {
            commands::verify::run(&cli.data_dir, &kit)?;
        }
    }

    Ok(())
}
