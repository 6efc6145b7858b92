//! quakemap - Earthquake and fault line maps
//!
//! Fetches a GeoJSON earthquake feed and a tectonic plate boundary feed,
//! classifies each earthquake by magnitude, and composes an interactive
//! Leaflet map with switchable base layers, toggleable overlays and a
//! magnitude legend.
//!
//! # High-Level API
//!
//! ```ignore
//! use quakemap::bootstrap::Bootstrap;
//! use quakemap::config::ConfigFile;
//! use quakemap::page::render_map_page;
//! use quakemap::provider::AsyncReqwestClient;
//!
//! let config = ConfigFile::load()?;
//! let http = AsyncReqwestClient::new()?;
//! let bootstrap = Bootstrap::new(http, config.feed_urls(), config.map_options(token));
//! let html = render_map_page(&bootstrap.run().await?)?;
//! ```

pub mod bootstrap;
pub mod classify;
pub mod compose;
pub mod config;
pub mod feature;
pub mod feed;
pub mod layers;
pub mod legend;
pub mod logging;
pub mod page;
pub mod provider;
pub mod render;

/// Version of the quakemap library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
