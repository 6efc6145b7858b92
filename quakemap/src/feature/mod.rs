//! Feed features.
//!
//! Earthquake and fault-line records arrive as GeoJSON. This module
//! validates them into a tagged [`Feature`] union at the ingestion boundary
//! so the renderer only ever sees well-formed geometry.

mod geojson;
mod types;

pub use geojson::{FeatureCollection, RawFeature};
pub use types::{Feature, FeatureError, LatLng, LineFeature, PointFeature};
