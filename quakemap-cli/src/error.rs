//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use quakemap::bootstrap::BootstrapError;
use quakemap::config::ConfigFileError;
use quakemap::page::PageError;
use quakemap::provider::ProviderError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create the HTTP client
    HttpClient(ProviderError),
    /// Feeds could not be turned into a map
    Bootstrap(BootstrapError),
    /// Failed to render the page
    Page(PageError),
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Config(msg) if msg.contains("access token") => {
                eprintln!();
                eprintln!("Provide a MapBox access token in one of these ways:");
                eprintln!("  1. --access-token <TOKEN>");
                eprintln!("  2. MAPBOX_ACCESS_TOKEN environment variable");
                eprintln!("  3. access_token under [mapbox] in config.ini");
                eprintln!("     (run 'quakemap config init' to create one)");
            }
            CliError::Bootstrap(BootstrapError::Feed { .. }) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. No network connection");
                eprintln!("  2. Feed URL changed: check [feeds] in config.ini");
                eprintln!("  3. Slow feed: raise [download] timeout");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Bootstrap(e) => write!(f, "Failed to build map: {}", e),
            CliError::Page(e) => write!(f, "Failed to render page: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::HttpClient(e) => Some(e),
            CliError::Bootstrap(e) => Some(e),
            CliError::Page(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<BootstrapError> for CliError {
    fn from(e: BootstrapError) -> Self {
        CliError::Bootstrap(e)
    }
}

impl From<PageError> for CliError {
    fn from(e: PageError) -> Self {
        CliError::Page(e)
    }
}
