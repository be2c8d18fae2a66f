//! Command-line interface definitions.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::models::{NamingMode, PackConfig};

/// Rename skin textures and build the skin pack manifest
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path (JSON, or YAML by extension)
    #[arg(short, long, global = true, default_value = "config.json", value_hint = clap::ValueHint::FilePath)]
    pub config: Utf8PathBuf,

    /// Override the naming mode from the config file
    #[arg(long, global = true, value_enum)]
    pub naming: Option<NamingMode>,

    /// Also write a daily rotating log file into this directory
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub log_dir: Option<Utf8PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands (default: run)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rename the skins and write the manifest
    #[command(visible_alias = "r")]
    Run,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// The subcommand to execute, `run` when none was given.
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }

    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut PackConfig) {
        if let Some(naming) = self.naming {
            config.naming = naming;
        }
    }
}
