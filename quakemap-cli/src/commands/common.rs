//! Common utilities shared across CLI commands.

use std::path::PathBuf;

use quakemap::config::ConfigFile;
use quakemap::feed::FeedUrls;

use crate::error::CliError;

/// Resolve the MapBox access token.
///
/// The CLI argument (which clap also fills from `MAPBOX_ACCESS_TOKEN`) takes
/// precedence over config.ini.
pub fn resolve_access_token(
    cli_token: Option<String>,
    config: &ConfigFile,
) -> Result<String, CliError> {
    cli_token
        .filter(|t| !t.trim().is_empty())
        .or_else(|| config.mapbox.access_token.clone())
        .ok_or_else(|| {
            CliError::Config(
                "MapBox base layers require an access token. \
                 Set access_token in config.ini or use --access-token"
                    .to_string(),
            )
        })
}

/// Resolve feed URLs, CLI overrides first.
pub fn resolve_feed_urls(
    earthquakes: Option<String>,
    faults: Option<String>,
    config: &ConfigFile,
) -> FeedUrls {
    let configured = config.feed_urls();
    FeedUrls {
        earthquakes: earthquakes.unwrap_or(configured.earthquakes),
        faults: faults.unwrap_or(configured.faults),
    }
}

/// Resolve the output path, CLI override first.
pub fn resolve_output(output: Option<PathBuf>, config: &ConfigFile) -> PathBuf {
    output.unwrap_or_else(|| config.output.file.clone())
}
