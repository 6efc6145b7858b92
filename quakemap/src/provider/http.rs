//! HTTP client abstraction for testability

use super::types::ProviderError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for asynchronous HTTP client operations.
///
/// Feed fetching goes through this trait so tests can substitute canned
/// responses for the network.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error. Non-success status codes are
    /// reported as [`ProviderError::HttpError`].
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

fn user_agent() -> String {
    format!("quakemap/{}", crate::VERSION)
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient with the default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new AsyncReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent())
            .build()
            .map_err(|e| {
                ProviderError::HttpError(format!("Failed to create async HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(ProviderError::HttpError(format!("Request failed: {}", e)));
            }
        };

        if !response.status().is_success() {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(ProviderError::HttpError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(ProviderError::HttpError(format!(
                    "Failed to read response: {}",
                    e
                )))
            }
        }
    }
}
