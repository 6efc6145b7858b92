//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::compose::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::feed::{DEFAULT_EARTHQUAKE_FEED_URL, DEFAULT_FAULT_FEED_URL};
use crate::provider::DEFAULT_TIMEOUT_SECS;

/// Default feed request timeout in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT_SECS;

/// Default page written by `render`.
pub const DEFAULT_OUTPUT_FILE: &str = "earthquakes.html";

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "quakemap.log";

/// Highest zoom level the base layers serve.
pub const MAX_VIEW_ZOOM: u8 = 18;

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = config_directory();

        Self {
            feeds: FeedSettings {
                earthquakes: DEFAULT_EARTHQUAKE_FEED_URL.to_string(),
                faults: DEFAULT_FAULT_FEED_URL.to_string(),
            },
            mapbox: MapboxSettings { access_token: None },
            view: ViewSettings {
                center_lat: DEFAULT_CENTER.lat,
                center_lon: DEFAULT_CENTER.lng,
                zoom: DEFAULT_ZOOM,
            },
            download: DownloadSettings {
                timeout: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            },
            output: OutputSettings {
                file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            },
            logging: LoggingSettings {
                file: config_dir.join(DEFAULT_LOG_FILE),
            },
        }
    }
}
