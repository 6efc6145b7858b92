//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and file output
//! to reduce duplication across command handlers.

use std::path::Path;

use quakemap::config::ConfigFile;
use quakemap::logging::{init_logging, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner with optional debug logging.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.file, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("quakemap v{}", quakemap::VERSION);
        info!("quakemap CLI: {} command", command);
    }

    /// Write a rendered page to disk.
    pub fn save_page(&self, path: &Path, html: &str) -> Result<(), CliError> {
        std::fs::write(path, html).map_err(|e| CliError::FileWrite {
            path: path.display().to_string(),
            error: e,
        })?;

        let size_kb = html.len() as f64 / 1024.0;
        info!(path = %path.display(), size_kb = size_kb, "Page written");
        Ok(())
    }
}
