//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let access_token = config.mapbox.access_token.as_deref().unwrap_or("");

    format!(
        r#"[feeds]
; GeoJSON feature collection of earthquakes (USGS summary feeds work here)
; See: https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php
earthquakes = {}
; GeoJSON feature collection of plate boundary lines
faults = {}

[mapbox]
; MapBox access token for the satellite, grayscale and outdoors base layers
; Get one at: https://www.mapbox.com/
; The MAPBOX_ACCESS_TOKEN environment variable overrides this value
access_token = {}

[view]
; Initial map center and zoom level (0-18)
center_lat = {}
center_lon = {}
zoom = {}

[download]
; Timeout in seconds for each feed request
timeout = {}

[output]
; HTML page written by `quakemap render`
file = {}

[logging]
; Log file location
file = {}
"#,
        config.feeds.earthquakes,
        config.feeds.faults,
        access_token,
        config.view.center_lat,
        config.view.center_lon,
        config.view.zoom,
        config.download.timeout,
        path_to_string(&config.output.file),
        path_to_string(&config.logging.file),
    )
}

/// Render a path, collapsing the home directory back to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_saved_file_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.mapbox.access_token = Some("pk.saved".to_string());
        config.view.zoom = 7;
        config.view.center_lat = -33.87;
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_output_is_commented() {
        let text = to_config_string(&ConfigFile::default());
        assert!(text.contains("[feeds]"));
        assert!(text.contains("; MapBox access token"));
        assert!(text.contains("access_token = \n"));
        assert!(text.contains("zoom = 4"));
    }
}
