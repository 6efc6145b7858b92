//! GeoJSON ingestion.
//!
//! Feed documents are deserialized into a permissive raw shape first, then
//! each record is validated into a typed [`Feature`]. Only the fields the
//! map uses are inspected; everything else is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::types::{Feature, FeatureError, LatLng, LineFeature, PointFeature};

/// A parsed feed document.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<RawFeature>,
}

impl FeatureCollection {
    /// Parses a GeoJSON feature collection from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// An unvalidated feed record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl RawFeature {
    fn geometry_parts(&self) -> Result<(&str, &Value), FeatureError> {
        let geometry = self
            .geometry
            .as_ref()
            .and_then(Value::as_object)
            .ok_or(FeatureError::MissingGeometry)?;

        let kind = geometry
            .get("type")
            .and_then(Value::as_str)
            .ok_or(FeatureError::MissingGeometry)?;
        let coordinates = geometry
            .get("coordinates")
            .ok_or(FeatureError::MissingGeometry)?;

        Ok((kind, coordinates))
    }

    fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .as_ref()
            .and_then(|p| p.get(name))
            .filter(|v| !v.is_null())
    }
}

impl TryFrom<&RawFeature> for PointFeature {
    type Error = FeatureError;

    fn try_from(raw: &RawFeature) -> Result<Self, Self::Error> {
        let (kind, coordinates) = raw.geometry_parts()?;
        if kind != "Point" {
            return Err(FeatureError::UnsupportedGeometry {
                expected: "Point",
                found: kind.to_string(),
            });
        }
        let position = parse_position(coordinates)?;

        let magnitude = match raw.property("mag") {
            None => None,
            Some(v) => Some(v.as_f64().ok_or_else(|| FeatureError::InvalidProperty {
                name: "mag",
                reason: format!("expected a number, got {}", v),
            })?),
        };

        let place = match raw.property("place") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(v) => {
                return Err(FeatureError::InvalidProperty {
                    name: "place",
                    reason: format!("expected a string, got {}", v),
                })
            }
        };

        // Fractional milliseconds truncate toward zero.
        let time_ms = raw.property("time").and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|t| t.is_finite()).map(|t| t as i64))
        });

        Ok(PointFeature {
            position,
            magnitude,
            place,
            time_ms,
        })
    }
}

impl TryFrom<&RawFeature> for LineFeature {
    type Error = FeatureError;

    fn try_from(raw: &RawFeature) -> Result<Self, Self::Error> {
        let (kind, coordinates) = raw.geometry_parts()?;
        let paths = match kind {
            "LineString" => vec![parse_path(coordinates)?],
            "MultiLineString" => as_array(coordinates)?
                .iter()
                .map(parse_path)
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(FeatureError::UnsupportedGeometry {
                    expected: "LineString",
                    found: other.to_string(),
                })
            }
        };

        Ok(LineFeature { paths })
    }
}

impl TryFrom<&RawFeature> for Feature {
    type Error = FeatureError;

    fn try_from(raw: &RawFeature) -> Result<Self, Self::Error> {
        let (kind, _) = raw.geometry_parts()?;
        match kind {
            "Point" => PointFeature::try_from(raw).map(Feature::Point),
            "LineString" | "MultiLineString" => LineFeature::try_from(raw).map(Feature::Line),
            other => Err(FeatureError::UnsupportedGeometry {
                expected: "Point or LineString",
                found: other.to_string(),
            }),
        }
    }
}

fn as_array(value: &Value) -> Result<&Vec<Value>, FeatureError> {
    value
        .as_array()
        .ok_or_else(|| FeatureError::InvalidPosition(format!("expected an array, got {}", value)))
}

/// Parses `[lon, lat, ...]`, swapping into rendering order. Extra
/// elements such as depth are ignored.
fn parse_position(value: &Value) -> Result<LatLng, FeatureError> {
    let items = as_array(value)?;
    match (
        items.first().and_then(Value::as_f64),
        items.get(1).and_then(Value::as_f64),
    ) {
        (Some(lon), Some(lat)) => Ok(LatLng::from_lon_lat(lon, lat)),
        _ => Err(FeatureError::InvalidPosition(value.to_string())),
    }
}

fn parse_path(value: &Value) -> Result<Vec<LatLng>, FeatureError> {
    as_array(value)?.iter().map(parse_position).collect()
}
