// HTTP client for the remote database.
// Fetches the published CSV with a bounded timeout and maps status failures.

use std::time::Duration;

use reqwest::{
    Client, StatusCode,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, SearchError};

/// Canonical location of the published database.
pub const DATABASE_URL: &str = "https://raw.githubusercontent.com/Open-Wine-Components/umu-database/refs/heads/main/umu-database.csv";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote source of the database text.
#[allow(async_fn_in_trait)]
pub trait RemoteSource {
    /// Retrieve the full database text.
    async fn fetch(&self) -> Result<String>;
}

/// HTTP source backed by a shared reqwest client.
pub struct DatabaseClient {
    client: Client,
    url: String,
}

impl DatabaseClient {
    /// Create a client pointed at the canonical database URL.
    pub fn new() -> Result<Self> {
        Self::with_url(DATABASE_URL)
    }

    /// Create a client pointed at an arbitrary URL.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("umu-search"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SearchError::Fetch)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl RemoteSource for DatabaseClient {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!(url = %self.url, "fetching database");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(SearchError::Fetch)?;

        match response.status() {
            StatusCode::OK => Ok(response.text().await?),
            status => Err(SearchError::HttpStatus {
                status,
                url: self.url.clone(),
            }),
        }
    }
}
