//! Remote providers.
//!
//! Two kinds of remote collaborator sit behind this module:
//!
//! - An HTTP client ([`AsyncHttpClient`]) used to fetch the GeoJSON feeds.
//!   Production code uses [`AsyncReqwestClient`]; tests inject mocks.
//! - The MapBox raster tile service ([`MapboxTiles`]) that backs the base
//!   layers. Tiles are fetched by the browser, so this side only describes
//!   the layers and builds URLs.

mod http;
mod mapbox;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use mapbox::{MapboxStyle, MapboxTiles, TileLayer, MAPBOX_ATTRIBUTION, MAPBOX_URL_TEMPLATE};
pub use types::ProviderError;

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
