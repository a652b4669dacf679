//! Errors surfaced by the Invidious client.

use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum InvidiousError {
    /// Transport failure or non-success HTTP status.
    #[error("request to Invidious failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Response body was not JSON.
    #[error("failed to decode Invidious response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Instance URL could not be parsed.
    #[error("invalid instance url {url:?}: {source}")]
    InvalidInstance {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, InvidiousError>;
