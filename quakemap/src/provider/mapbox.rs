//! MapBox raster tile layers.
//!
//! The map offers three MapBox styles as mutually exclusive base layers.
//! Every style is served from the same v4 raster endpoint and requires an
//! access token.
//!
//! # URL Pattern
//!
//! `https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}`
//!
//! - `{id}` is the style identifier, e.g. `mapbox.satellite`
//! - `{z}/{x}/{y}` are standard Web Mercator XYZ tile coordinates
//!
//! The template is handed to the browser map library unchanged; it fills in
//! `{id}` and `{accessToken}` from the layer options.

use serde::Serialize;

use super::ProviderError;

/// Tile URL template shared by all MapBox styles.
pub const MAPBOX_URL_TEMPLATE: &str =
    "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}";

/// Attribution required by the MapBox and OpenStreetMap terms.
pub const MAPBOX_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

/// Minimum zoom level supported by MapBox.
const MIN_ZOOM: u8 = 0;

/// Maximum zoom level offered on the map.
const MAX_ZOOM: u8 = 18;

/// MapBox raster styles used as base layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapboxStyle {
    Satellite,
    Light,
    Outdoors,
}

impl MapboxStyle {
    /// Base layers in switcher order.
    pub const ALL: [MapboxStyle; 3] = [
        MapboxStyle::Satellite,
        MapboxStyle::Light,
        MapboxStyle::Outdoors,
    ];

    /// MapBox style identifier.
    pub fn id(&self) -> &'static str {
        match self {
            MapboxStyle::Satellite => "mapbox.satellite",
            MapboxStyle::Light => "mapbox.light",
            MapboxStyle::Outdoors => "mapbox.outdoors",
        }
    }

    /// Name shown in the layer switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            MapboxStyle::Satellite => "Satellite Map",
            MapboxStyle::Light => "Grayscale",
            MapboxStyle::Outdoors => "Outdoors",
        }
    }
}

/// A raster base layer description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: String,
    pub id: String,
    pub url_template: String,
    pub attribution: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub access_token: String,
}

impl TileLayer {
    /// Checks if this layer serves the given zoom level.
    pub fn supports_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && zoom <= self.max_zoom
    }

    /// Builds the concrete URL for one tile.
    pub fn tile_url(&self, zoom: u8, x: u32, y: u32) -> Result<String, ProviderError> {
        if !self.supports_zoom(zoom) {
            return Err(ProviderError::UnsupportedZoom(zoom));
        }

        Ok(self
            .url_template
            .replace("{id}", &self.id)
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{accessToken}", &self.access_token))
    }
}

/// Factory for MapBox tile layers sharing one access token.
#[derive(Clone)]
pub struct MapboxTiles {
    access_token: String,
}

impl MapboxTiles {
    /// Creates a factory using the given access token.
    ///
    /// # Arguments
    ///
    /// * `access_token` - MapBox access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn name(&self) -> &str {
        "MapBox"
    }

    /// Describes the base layer for one style.
    pub fn tile_layer(&self, style: MapboxStyle) -> TileLayer {
        TileLayer {
            name: style.display_name().to_string(),
            id: style.id().to_string(),
            url_template: MAPBOX_URL_TEMPLATE.to_string(),
            attribution: MAPBOX_ATTRIBUTION.to_string(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            access_token: self.access_token.clone(),
        }
    }

    /// All base layers in switcher order.
    pub fn base_layers(&self) -> Vec<TileLayer> {
        MapboxStyle::ALL
            .iter()
            .map(|style| self.tile_layer(*style))
            .collect()
    }
}

impl std::fmt::Debug for MapboxTiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxTiles")
            .field("access_token", &"<redacted>")
            .finish()
    }
}
