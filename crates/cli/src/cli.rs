use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{build_command, init_command, transpile_command};

#[derive(Parser, Debug)]
#[command(name = "plugsmith")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a plugin jar from a JSON descriptor
    #[command(visible_alias = "b")]
    Build {
        /// Path to the plugin descriptor (e.g., plugin.json)
        descriptor: String,

        /// Use this config file instead of searching for .plugsmith.json
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Print the Java handler generated for a callback file
    #[command(visible_alias = "t")]
    Transpile {
        /// Path to the callback source
        file: String,

        /// Guard the handler with a capability check (e.g., player)
        #[arg(short, long)]
        guard: Option<String>,

        /// Command name used for the generated class
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Write a default .plugsmith.json
    Init {
        /// Specify the current working directory
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Build { descriptor, config } => build_command(&descriptor, config.as_deref()),
            Commands::Transpile { file, guard, name } => {
                transpile_command(&file, guard.as_deref(), name.as_deref())
            }
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
