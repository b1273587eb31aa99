//! CLI argument definitions for kitforge
//!
//! All clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kitforge",
    version,
    about = "Build, validate and export Minecraft kits"
)]
pub struct Cli {
    /// Catalog data directory (one subdirectory per content version)
    #[arg(long, global = true, default_value = "data", env = "KITFORGE_DATA_DIR")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the item and enchantment catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Validate a kit layout file against the catalog rules
    Check {
        /// Kit layout file (JSON)
        kit: PathBuf,
    },

    /// Export a kit layout
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },

    /// Round-trip a kit through the command encoding and compare
    Verify {
        /// Kit layout file (JSON)
        kit: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List items in a catalog version
    Items {
        /// Content version, e.g. 1.20
        #[arg(long, default_value = "1.20")]
        version: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List enchantments in a catalog version
    Enchantments {
        /// Content version, e.g. 1.20
        #[arg(long, default_value = "1.20")]
        version: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ExportCommand {
    /// Write the gzipped named-tag container
    Nbt {
        /// Kit layout file (JSON)
        kit: PathBuf,

        /// Output path for the container file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the /give command line
    Command {
        /// Kit layout file (JSON)
        kit: PathBuf,
    },
}
