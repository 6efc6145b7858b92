//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init` for inspecting
//! and creating the configuration file.

use clap::Subcommand;
use quakemap::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration
    Show,

    /// Create the configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init { force } => run_init(force),
    }
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Print the effective settings, token masked.
fn run_show() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    print!("{}", format_settings(&config));
    Ok(())
}

/// Write the default configuration file.
fn run_init(force: bool) -> Result<(), CliError> {
    let path = config_file_path();

    if path.exists() && !force {
        println!("Configuration already exists: {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    if force {
        ConfigFile::default().save_to(&path)?;
    } else {
        ConfigFile::ensure_exists()?;
    }

    println!("Created {}", path.display());
    println!("Add your MapBox access token under [mapbox] before running 'quakemap render'.");
    Ok(())
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

fn format_settings(config: &ConfigFile) -> String {
    let token = config
        .mapbox
        .access_token
        .as_deref()
        .map(mask_token)
        .unwrap_or_else(|| "(not set)".to_string());

    format!(
        "[feeds]\n  earthquakes = {}\n  faults = {}\n\n\
         [mapbox]\n  access_token = {}\n\n\
         [view]\n  center_lat = {}\n  center_lon = {}\n  zoom = {}\n\n\
         [download]\n  timeout = {}\n\n\
         [output]\n  file = {}\n\n\
         [logging]\n  file = {}\n",
        config.feeds.earthquakes,
        config.feeds.faults,
        token,
        config.view.center_lat,
        config.view.center_lon,
        config.view.zoom,
        config.download.timeout,
        config.output.file.display(),
        config.logging.file.display(),
    )
}
