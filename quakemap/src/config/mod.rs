//! Configuration for quakemap.
//!
//! User settings live in `~/.quakemap/config.ini`:
//!
//! ```ini
//! [feeds]
//! earthquakes = https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson
//! faults = https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json
//!
//! [mapbox]
//! access_token = pk.your_token
//!
//! [view]
//! center_lat = 34.05
//! center_lon = -118.24
//! zoom = 4
//! ```
//!
//! A missing file yields defaults. Unknown sections and keys are ignored.

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FILE, MAX_VIEW_ZOOM,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, DownloadSettings, FeedSettings, LoggingSettings, MapboxSettings, OutputSettings,
    ViewSettings,
};
