//! GeoJSON feed client.

use super::error::FeedError;
use crate::feature::FeatureCollection;
use crate::provider::AsyncHttpClient;

/// USGS summary feed of all earthquakes in the past day.
pub const DEFAULT_EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

/// PB2002 plate boundary dataset.
pub const DEFAULT_FAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Locations of the two feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrls {
    pub earthquakes: String,
    pub faults: String,
}

impl Default for FeedUrls {
    fn default() -> Self {
        Self {
            earthquakes: DEFAULT_EARTHQUAKE_FEED_URL.to_string(),
            faults: DEFAULT_FAULT_FEED_URL.to_string(),
        }
    }
}

/// Fetches and parses feature collections over HTTP.
pub struct FeedClient<C: AsyncHttpClient> {
    http: C,
}

impl<C: AsyncHttpClient> FeedClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Fetches one feed. No retry.
    pub async fn fetch(&self, url: &str) -> Result<FeatureCollection, FeedError> {
        let bytes = self.http.get(url).await.map_err(|source| FeedError::Http {
            url: url.to_string(),
            source,
        })?;

        let collection = FeatureCollection::from_slice(&bytes).map_err(|e| FeedError::Json {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            url = url,
            bytes = bytes.len(),
            features = collection.len(),
            "Feed fetched"
        );

        Ok(collection)
    }
}
