//! Typed feature definitions.

use serde::Serialize;
use thiserror::Error;

/// A geographic position in rendering order (latitude first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a position from GeoJSON axis order (`[lon, lat]`).
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lng: lon }
    }
}

/// An earthquake event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    /// Epicenter.
    pub position: LatLng,
    /// Magnitude, `None` when the feed reports it as null.
    pub magnitude: Option<f64>,
    /// Human-readable location, `None` when the feed omits it.
    pub place: Option<String>,
    /// Origin time in milliseconds since the Unix epoch, `None` when the
    /// feed omits it or reports something other than a number.
    pub time_ms: Option<i64>,
}

/// A tectonic boundary, one path per line part.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFeature {
    pub paths: Vec<Vec<LatLng>>,
}

impl LineFeature {
    /// Total number of vertices across all parts.
    pub fn vertex_count(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }
}

/// A validated feed record.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Point(PointFeature),
    Line(LineFeature),
}

/// Reasons a raw feed record cannot become a [`Feature`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// The record has no geometry object.
    #[error("feature has no geometry")]
    MissingGeometry,

    /// The geometry type is not one this layer can draw.
    #[error("expected {expected} geometry, found {found}")]
    UnsupportedGeometry {
        expected: &'static str,
        found: String,
    },

    /// A coordinate is not a `[lon, lat]` pair of numbers.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A property has the wrong type.
    #[error("invalid property '{name}': {reason}")]
    InvalidProperty { name: &'static str, reason: String },
}
