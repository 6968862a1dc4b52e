use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{init_command, patterns_command, scan_command};

#[derive(Parser, Debug)]
#[command(name = "luascope")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the identifiers in scope at a location in a Lua file
    #[command(visible_alias = "s")]
    Scan {
        /// Path to the Lua file with optional 1-based location (e.g., init.lua:12:5)
        filepath: String,

        /// Byte offset of the cursor; overrides any location in the path
        offset: Option<usize>,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,

        /// Use this config file instead of searching for .luascope.json
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the lexical patterns in priority order
    #[command(visible_alias = "p")]
    Patterns,
    /// Write a default .luascope.json
    Init {
        /// Directory to write into (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Scan {
                filepath,
                offset,
                json,
                config,
            } => scan_command(&filepath, offset, json, config.as_deref()),
            Commands::Patterns => patterns_command(),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
