//! Blocking HTTP client for the published feeds.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use painel_model::Dataset;

use crate::csv::parse_csv;
use crate::error::{IngestError, Result};
use crate::materialize::materialize;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for fetching feed CSVs. One instance is enough for a whole
/// command invocation; responses are never cached.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("painel-aps/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| IngestError::Network(error.to_string()))?;
        Ok(Self { client })
    }

    /// Fetches the raw feed body. Success is a 2xx response with a
    /// readable text body; everything else is an error.
    pub fn fetch_feed(&self, url: &str) -> Result<String> {
        debug!(url, "fetching feed");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| IngestError::Network(error.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "feed request failed");
            return Err(IngestError::Status(status.as_u16()));
        }
        response
            .text()
            .map_err(|error| IngestError::Decode(error.to_string()))
    }

    /// Fetch + parse + materialize in one step. Either a full dataset is
    /// produced or an error; there is no partial-success state.
    pub fn load_dataset(&self, url: &str) -> Result<Dataset> {
        let text = self.fetch_feed(url)?;
        let parsed = parse_csv(&text);
        if parsed.rows.is_empty() {
            return Err(IngestError::EmptyFeed);
        }
        Ok(materialize(&parsed))
    }
}
