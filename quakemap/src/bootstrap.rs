//! Startup sequence.
//!
//! Fetches both feeds concurrently, waits for both, builds the two layer
//! groups and composes the view. Any failure aborts the whole sequence with a
//! [`BootstrapError`]; nothing is rendered from a partial result.

use std::time::Instant;

use thiserror::Error;
use tracing::{info, instrument};

use crate::compose::{compose_view, MapOptions, MapView};
use crate::feed::{FeedClient, FeedError, FeedUrls};
use crate::layers::{build_earthquake_layer_group, build_fault_layer_group, LayerError};
use crate::provider::AsyncHttpClient;

/// Which of the two feeds a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Earthquakes,
    FaultLines,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Earthquakes => f.write_str("earthquake feed"),
            FeedKind::FaultLines => f.write_str("fault line feed"),
        }
    }
}

/// Errors that prevent the map from being composed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BootstrapError {
    #[error("{feed} unavailable: {source}")]
    Feed {
        feed: FeedKind,
        #[source]
        source: FeedError,
    },

    #[error(transparent)]
    Layer(#[from] LayerError),
}

/// Drives one startup: fetch, build, compose.
pub struct Bootstrap<C: AsyncHttpClient> {
    feeds: FeedClient<C>,
    urls: FeedUrls,
    options: MapOptions,
}

impl<C: AsyncHttpClient> Bootstrap<C> {
    pub fn new(http: C, urls: FeedUrls, options: MapOptions) -> Self {
        Self {
            feeds: FeedClient::new(http),
            urls,
            options,
        }
    }

    /// Runs the sequence to completion.
    #[instrument(skip(self), fields(earthquakes = %self.urls.earthquakes, faults = %self.urls.faults))]
    pub async fn run(&self) -> Result<MapView, BootstrapError> {
        let start = Instant::now();

        let (quake_feed, fault_feed) = tokio::try_join!(
            async {
                self.feeds
                    .fetch(&self.urls.earthquakes)
                    .await
                    .map_err(|source| BootstrapError::Feed {
                        feed: FeedKind::Earthquakes,
                        source,
                    })
            },
            async {
                self.feeds
                    .fetch(&self.urls.faults)
                    .await
                    .map_err(|source| BootstrapError::Feed {
                        feed: FeedKind::FaultLines,
                        source,
                    })
            },
        )?;

        info!(
            earthquakes = quake_feed.len(),
            fault_lines = fault_feed.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Feeds fetched"
        );

        let earthquakes = build_earthquake_layer_group(&quake_feed.features)?;
        let fault_lines = build_fault_layer_group(&fault_feed.features)?;

        Ok(compose_view(earthquakes, fault_lines, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockAsyncHttpClient, ProviderError};

    const QUAKES: &str = "https://feeds.test/quakes";
    const FAULTS: &str = "https://feeds.test/faults";

    fn urls() -> FeedUrls {
        FeedUrls {
            earthquakes: QUAKES.to_string(),
            faults: FAULTS.to_string(),
        }
    }

    fn quake_body() -> Vec<u8> {
        br#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"Point","coordinates":[-118.24,34.05,8.1]},
             "properties":{"mag":3,"place":"Test","time":0}}
        ]}"#
        .to_vec()
    }

    fn fault_body() -> Vec<u8> {
        br#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"LineString","coordinates":[[-120,35],[-121,36]]},
             "properties":{"Name":"PA-NA"}}
        ]}"#
        .to_vec()
    }

    fn empty_body() -> Vec<u8> {
        br#"{"type":"FeatureCollection","features":[]}"#.to_vec()
    }

    #[tokio::test]
    async fn test_run_composes_view() {
        let http = MockAsyncHttpClient::new()
            .with(QUAKES, Ok(quake_body()))
            .with(FAULTS, Ok(fault_body()));

        let view = Bootstrap::new(http, urls(), MapOptions::new("pk.test"))
            .run()
            .await
            .unwrap();

        assert_eq!(view.overlays[0].group.len(), 1);
        assert_eq!(view.overlays[1].group.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_feeds_still_compose() {
        let http = MockAsyncHttpClient::new()
            .with(QUAKES, Ok(empty_body()))
            .with(FAULTS, Ok(empty_body()));

        let view = Bootstrap::new(http, urls(), MapOptions::new("pk.test"))
            .run()
            .await
            .unwrap();

        assert!(view.overlays.iter().all(|o| o.group.is_empty()));
    }

    #[tokio::test]
    async fn test_one_failed_feed_aborts() {
        let http = MockAsyncHttpClient::new()
            .with(QUAKES, Ok(quake_body()))
            .with(
                FAULTS,
                Err(ProviderError::HttpError("HTTP 404 Not Found".to_string())),
            );

        let err = Bootstrap::new(http, urls(), MapOptions::new("pk.test"))
            .run()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BootstrapError::Feed {
                feed: FeedKind::FaultLines,
                ..
            }
        ));
        assert!(err.to_string().starts_with("fault line feed unavailable"));
    }

    #[tokio::test]
    async fn test_malformed_feature_aborts() {
        let bad = br#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"time":0}}]}"#;
        let http = MockAsyncHttpClient::new()
            .with(QUAKES, Ok(bad.to_vec()))
            .with(FAULTS, Ok(fault_body()));

        let err = Bootstrap::new(http, urls(), MapOptions::new("pk.test"))
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, BootstrapError::Layer(_)));
    }
}
