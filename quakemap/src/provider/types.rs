//! Provider types.

use std::fmt;

/// Errors that can occur when talking to a remote provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// HTTP request failed
    HttpError(String),
    /// Zoom level not supported by this provider
    UnsupportedZoom(u8),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::UnsupportedZoom(zoom) => {
                write!(f, "Zoom level {} not supported by provider", zoom)
            }
        }
    }
}

impl std::error::Error for ProviderError {}
