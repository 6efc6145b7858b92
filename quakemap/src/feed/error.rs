//! Error types for feed fetching.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors that can occur when fetching a GeoJSON feed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// Network failure or non-success HTTP status.
    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: ProviderError,
    },

    /// The body is not a GeoJSON feature collection.
    #[error("Failed to parse {url}: {reason}")]
    Json { url: String, reason: String },
}
