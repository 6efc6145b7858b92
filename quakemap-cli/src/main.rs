//! quakemap CLI - Command-line interface
//!
//! Renders the earthquake and fault line map to an HTML page.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::render::RenderArgs;

#[derive(Parser)]
#[command(name = "quakemap")]
#[command(version = quakemap::VERSION)]
#[command(about = "Map recent earthquakes over tectonic plate boundaries", long_about = None)]
struct Cli {
    /// Enable debug-level logging regardless of RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both feeds and write the interactive map page
    Render {
        /// Output HTML file (defaults to [output] file in config.ini)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// MapBox access token for the base layers
        #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<String>,

        /// Earthquake feed URL (overrides config.ini)
        #[arg(long)]
        earthquakes: Option<String>,

        /// Fault line feed URL (overrides config.ini)
        #[arg(long)]
        faults: Option<String>,
    },

    /// Print the magnitude band table used for marker colors
    Legend,

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            output,
            access_token,
            earthquakes,
            faults,
        } => {
            commands::render::run(RenderArgs {
                output,
                access_token,
                earthquakes,
                faults,
                debug: cli.debug,
            })
            .await
        }
        Commands::Legend => commands::legend::run(),
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
