//! Integration tests for the full startup flow.
//!
//! These tests drive the public API end to end:
//! - Feed bytes → FeatureCollection → LayerGroups → MapView
//! - MapView → HTML page
//! - Base layer and overlay switching on a composed view
//!
//! Run with: `cargo test --test bootstrap_integration`

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use quakemap::bootstrap::{Bootstrap, BootstrapError, FeedKind};
use quakemap::compose::{MapOptions, MapView};
use quakemap::feature::LatLng;
use quakemap::feed::{FeedError, FeedUrls};
use quakemap::layers::{LayerError, EARTHQUAKES, FAULT_LINES};
use quakemap::page::render_map_page;
use quakemap::provider::{AsyncHttpClient, ProviderError};
use quakemap::render::StyledLayer;

// ============================================================================
// Test Helpers
// ============================================================================

const QUAKE_URL: &str = "https://feeds.test/earthquakes.geojson";
const FAULT_URL: &str = "https://feeds.test/boundaries.json";

/// Canned HTTP responses keyed by URL, counting requests.
#[derive(Clone, Default)]
struct CannedHttp {
    responses: HashMap<String, Result<Vec<u8>, ProviderError>>,
    requests: Arc<AtomicUsize>,
}

impl CannedHttp {
    fn with(mut self, url: &str, response: Result<&str, ProviderError>) -> Self {
        self.responses
            .insert(url.to_string(), response.map(|body| body.as_bytes().to_vec()));
        self
    }

    fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl AsyncHttpClient for CannedHttp {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ProviderError::HttpError("HTTP 404 Not Found".to_string())))
    }
}

fn urls() -> FeedUrls {
    FeedUrls {
        earthquakes: QUAKE_URL.to_string(),
        faults: FAULT_URL.to_string(),
    }
}

const QUAKES: &str = r#"{
  "type": "FeatureCollection",
  "metadata": { "title": "USGS All Earthquakes, Past Day" },
  "features": [
    {
      "type": "Feature",
      "properties": { "mag": 0.5, "place": "5km NW of The Geysers, CA", "time": 0 },
      "geometry": { "type": "Point", "coordinates": [-122.8, 38.8, 2.1] }
    },
    {
      "type": "Feature",
      "properties": { "mag": 4.2, "place": "Fiji region", "time": 1700000000000 },
      "geometry": { "type": "Point", "coordinates": [178.1, -17.9, 560.0] }
    },
    {
      "type": "Feature",
      "properties": { "mag": 6.7, "place": null, "time": 1700000000000 },
      "geometry": { "type": "Point", "coordinates": [142.4, 38.3] }
    }
  ]
}"#;

const FAULTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "Name": "PA-NA", "PlateA": "PA", "PlateB": "NA" },
      "geometry": { "type": "LineString", "coordinates": [[-124.0, 40.3], [-122.0, 37.5], [-116.0, 33.0]] }
    },
    {
      "type": "Feature",
      "properties": { "Name": "AU-PA" },
      "geometry": {
        "type": "MultiLineString",
        "coordinates": [[[179.9, -16.0], [180.0, -16.5]], [[-180.0, -16.5], [-179.5, -17.0]]]
      }
    }
  ]
}"#;

async fn compose(http: CannedHttp) -> Result<MapView, BootstrapError> {
    Bootstrap::new(http, urls(), MapOptions::new("pk.integration"))
        .run()
        .await
}

// ============================================================================
// Full Flow
// ============================================================================

#[tokio::test]
async fn test_feeds_become_layers_in_order() {
    let http = CannedHttp::default()
        .with(QUAKE_URL, Ok(QUAKES))
        .with(FAULT_URL, Ok(FAULTS));

    let view = compose(http.clone()).await.unwrap();

    assert_eq!(http.request_count(), 2);
    assert_eq!(view.overlays[0].name(), EARTHQUAKES);
    assert_eq!(view.overlays[1].name(), FAULT_LINES);

    let quakes = &view.overlays[0].group.layers;
    assert_eq!(quakes.len(), 3);

    let colors: Vec<&str> = quakes
        .iter()
        .map(|l| l.style().fill_color.map(|c| c.as_str()).unwrap_or(""))
        .collect();
    assert_eq!(colors, vec!["#DAF7A6", "#900C3F", "#581845"]);

    match &quakes[1] {
        StyledLayer::CircleMarker { center, radius, .. } => {
            assert_eq!(*center, LatLng::new(-17.9, 178.1));
            assert!((*radius - 21.0).abs() < 1e-9);
        }
        other => panic!("expected circle marker, got {:?}", other),
    }

    let faults = &view.overlays[1].group.layers;
    assert_eq!(faults.len(), 2);
    match &faults[1] {
        StyledLayer::Polyline { paths, .. } => assert_eq!(paths.len(), 2),
        other => panic!("expected polyline, got {:?}", other),
    }
}

#[tokio::test]
async fn test_popups_carry_place_and_time() {
    let http = CannedHttp::default()
        .with(QUAKE_URL, Ok(QUAKES))
        .with(FAULT_URL, Ok(FAULTS));

    let view = compose(http).await.unwrap();
    let quakes = &view.overlays[0].group.layers;

    let first = quakes[0].popup().unwrap();
    assert_eq!(first.title, "5km NW of The Geysers, CA");
    assert_eq!(first.timestamp, "Thu Jan 01 1970 00:00:00 UTC");

    let unnamed = quakes[2].popup().unwrap();
    assert_eq!(unnamed.title, "Unknown location");

    assert!(view.overlays[1]
        .group
        .layers
        .iter()
        .all(|l| l.popup().is_none()));
}

#[tokio::test]
async fn test_page_embeds_composed_view() {
    let http = CannedHttp::default()
        .with(QUAKE_URL, Ok(QUAKES))
        .with(FAULT_URL, Ok(FAULTS));

    let view = compose(http).await.unwrap();
    let html = render_map_page(&view).unwrap();

    assert!(html.contains("Fiji region"));
    assert!(html.contains("\"activeBase\":\"Satellite Map\""));
    assert!(html.contains("Earthquake Magnitude"));
    assert!(html.contains("pk.integration"));
}

// ============================================================================
// View Interaction
// ============================================================================

#[tokio::test]
async fn test_switching_layers_on_composed_view() {
    let http = CannedHttp::default()
        .with(QUAKE_URL, Ok(QUAKES))
        .with(FAULT_URL, Ok(FAULTS));

    let mut view = compose(http).await.unwrap();
    assert_eq!(
        view.active_layers(),
        vec!["Satellite Map", EARTHQUAKES, FAULT_LINES]
    );

    view.select_base_layer("Grayscale").unwrap();
    assert!(!view.toggle_overlay(EARTHQUAKES).unwrap());
    assert_eq!(view.active_layers(), vec!["Grayscale", FAULT_LINES]);

    assert!(view.select_base_layer("Terrain").is_err());
    assert_eq!(view.active_base, "Grayscale");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unreachable_earthquake_feed_aborts() {
    let http = CannedHttp::default().with(FAULT_URL, Ok(FAULTS));

    let err = compose(http).await.unwrap_err();
    match err {
        BootstrapError::Feed { feed, source } => {
            assert_eq!(feed, FeedKind::Earthquakes);
            assert!(matches!(source, FeedError::Http { .. }));
        }
        other => panic!("expected feed error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_fault_json_aborts() {
    let http = CannedHttp::default()
        .with(QUAKE_URL, Ok(QUAKES))
        .with(FAULT_URL, Ok("<html>rate limited</html>"));

    let err = compose(http).await.unwrap_err();
    assert!(matches!(
        err,
        BootstrapError::Feed {
            feed: FeedKind::FaultLines,
            source: FeedError::Json { .. },
        }
    ));
}

#[tokio::test]
async fn test_invalid_feature_reports_group_and_index() {
    let quakes = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"mag":1.0,"time":0},"geometry":{"type":"Point","coordinates":[0,0]}},
        {"type":"Feature","properties":{"mag":1.0,"time":0},"geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}}
    ]}"#;
    let http = CannedHttp::default()
        .with(QUAKE_URL, Ok(quakes))
        .with(FAULT_URL, Ok(FAULTS));

    let err = compose(http).await.unwrap_err();
    match err {
        BootstrapError::Layer(LayerError::InvalidFeature { group, index, .. }) => {
            assert_eq!(group, EARTHQUAKES);
            assert_eq!(index, 1);
        }
        other => panic!("expected layer error, got {:?}", other),
    }
}
