//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::compose::MapOptions;
use crate::feature::LatLng;
use crate::feed::FeedUrls;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Feed locations
    pub feeds: FeedSettings,
    /// MapBox credentials
    pub mapbox: MapboxSettings,
    /// Initial map view
    pub view: ViewSettings,
    /// Download settings
    pub download: DownloadSettings,
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Feed URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    /// Earthquake feature collection URL
    pub earthquakes: String,
    /// Fault-line feature collection URL
    pub faults: String,
}

/// MapBox configuration.
#[derive(Clone, PartialEq)]
pub struct MapboxSettings {
    /// Access token for the base layers
    pub access_token: Option<String>,
}

impl std::fmt::Debug for MapboxSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxSettings")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Initial map position.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

/// Download configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSettings {
    /// Timeout in seconds for each feed request.
    pub timeout: u64,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Where the rendered page is written
    pub file: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

impl ConfigFile {
    /// Feed locations as used by the bootstrap.
    pub fn feed_urls(&self) -> FeedUrls {
        FeedUrls {
            earthquakes: self.feeds.earthquakes.clone(),
            faults: self.feeds.faults.clone(),
        }
    }

    /// Map options for the given access token, using the configured view.
    pub fn map_options(&self, access_token: impl Into<String>) -> MapOptions {
        MapOptions::new(access_token)
            .with_center(LatLng::new(self.view.center_lat, self.view.center_lon))
            .with_zoom(self.view.zoom)
    }
}
