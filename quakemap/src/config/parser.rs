//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MAX_VIEW_ZOOM;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_url(section: &str, key: &str, value: &str) -> Result<String, ConfigFileError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(invalid(section, key, value, "must be an http:// or https:// URL"))
    }
}

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [feeds] section
    if let Some(section) = ini.section(Some("feeds")) {
        if let Some(v) = section.get("earthquakes") {
            config.feeds.earthquakes = parse_url("feeds", "earthquakes", v)?;
        }
        if let Some(v) = section.get("faults") {
            config.feeds.faults = parse_url("feeds", "faults", v)?;
        }
    }

    // [mapbox] section
    if let Some(section) = ini.section(Some("mapbox")) {
        if let Some(v) = section.get("access_token") {
            let v = v.trim();
            if !v.is_empty() {
                config.mapbox.access_token = Some(v.to_string());
            }
        }
    }

    // [view] section
    if let Some(section) = ini.section(Some("view")) {
        if let Some(v) = section.get("center_lat") {
            config.view.center_lat = v
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|lat| (-90.0..=90.0).contains(lat))
                .ok_or_else(|| {
                    invalid("view", "center_lat", v, "must be a number between -90 and 90")
                })?;
        }
        if let Some(v) = section.get("center_lon") {
            config.view.center_lon = v
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|lon| (-180.0..=180.0).contains(lon))
                .ok_or_else(|| {
                    invalid("view", "center_lon", v, "must be a number between -180 and 180")
                })?;
        }
        if let Some(v) = section.get("zoom") {
            config.view.zoom = v
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|zoom| *zoom <= MAX_VIEW_ZOOM)
                .ok_or_else(|| invalid("view", "zoom", v, "must be an integer between 0 and 18"))?;
        }
    }

    // [download] section
    if let Some(section) = ini.section(Some("download")) {
        if let Some(v) = section.get("timeout") {
            config.download.timeout = v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    invalid("download", "timeout", v, "must be a positive integer (seconds)")
                })?;
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.output.file = expand_tilde(v);
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
