//! SkinPack - rename a folder of skin textures and build the pack manifest.
//!
//! Main entry point for the command-line tool.
//!
//! # Execution Flow
//!
//! 1. Parse the command line
//! 2. Initialize logging (stderr, plus a rotating file with `--log-dir`)
//! 3. `init`: write a default config file and stop
//! 4. `run` (default): load `config.json`, apply overrides, rename the skins,
//!    write the manifest and print `Finished with N skins`
//!
//! Any error before or after the rename loop ends the process with a non-zero
//! exit status. Files that could not be renamed are reported as they happen
//! and do not stop the run.

use anyhow::{Context, Result, bail};
use clap::Parser;
use skinpack::cli::{Cli, Commands};
use skinpack::{APP_NAME, ConfigManager, PackConfig, VERSION};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so the file writer flushes on exit
    let _guard = skinpack::logging::setup_logging(cli.log_dir.as_deref(), cli.verbose)?;

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let config_manager = ConfigManager::new(&cli.config);

    match cli.subcommand() {
        Commands::Init { force } => init_config(&config_manager, force),
        Commands::Run => run(&cli, &config_manager),
    }
}

fn init_config(config_manager: &ConfigManager, force: bool) -> Result<()> {
    if config_manager.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            config_manager.config_path()
        );
    }

    config_manager.save(&PackConfig::default())?;
    println!("Wrote default config to {}", config_manager.config_path());
    Ok(())
}

fn run(cli: &Cli, config_manager: &ConfigManager) -> Result<()> {
    let mut config = config_manager
        .load()
        .context("Error loading config")?;
    cli.apply_overrides(&mut config);

    let summary = skinpack::run_pack(&config).context("Skin pack run failed")?;
    println!("Finished with {} skins", summary.processed());
    Ok(())
}
