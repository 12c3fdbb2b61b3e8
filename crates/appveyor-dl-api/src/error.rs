use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::url::UrlError;

/// Errors raised while talking to the AppVeyor API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request URL could not be constructed
    #[error(transparent)]
    Url(#[from] UrlError),

    /// Request could not be built or sent
    #[error("HTTP request to {url} failed: {source}")]
    Request {
        /// Target URL
        url: Url,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        /// Target URL
        url: Url,
        /// Response status
        status: StatusCode,
    },

    /// Response body could not be read to the end
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        /// Target URL
        url: Url,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// Response body is not the expected JSON shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Target URL
        url: Url,
        /// Underlying serde_json error
        #[source]
        source: serde_json::Error,
    },
}
