use thiserror::Error;

/// Failures while fetching or decoding a feed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected response status: {0}")]
    Status(u16),

    /// The response body could not be read as text.
    #[error("response decode error: {0}")]
    Decode(String),

    /// The feed parsed to zero rows; there is nothing to materialize.
    #[error("feed returned no rows")]
    EmptyFeed,
}

impl IngestError {
    /// The single user-facing message every feed failure collapses to.
    /// The precise variant still reaches the logs.
    pub fn user_message(&self) -> &'static str {
        "Falha ao carregar dados"
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
