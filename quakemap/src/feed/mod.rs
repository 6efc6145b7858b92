//! Remote GeoJSON feeds.
//!
//! [`FeedClient`] wraps an [`AsyncHttpClient`](crate::provider::AsyncHttpClient)
//! and turns a URL into a parsed [`FeatureCollection`](crate::feature::FeatureCollection).

mod client;
mod error;

pub use client::{FeedClient, FeedUrls, DEFAULT_EARTHQUAKE_FEED_URL, DEFAULT_FAULT_FEED_URL};
pub use error::FeedError;
