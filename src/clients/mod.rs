/// External API clients module
use std::time::Duration;

use reqwest::Client;

use crate::config::{AsfConfig, BasicAuth};
use crate::errors::QueryResult;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout_seconds: u64) -> QueryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent("qquery-asf/0.1")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Catalog search client: executes an already-compiled query URL.
///
/// `basic_auth` is attached to every request when configured. The ASF
/// catalog currently requires no credentials, so it is normally `None`;
/// the hook stays in place for providers that re-enable auth.
pub struct SearchClient {
    http_client: HttpClient,
    basic_auth: Option<BasicAuth>,
}

impl SearchClient {
    pub fn new(config: &AsfConfig) -> QueryResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(config.http_timeout_seconds)?,
            basic_auth: config.basic_auth.clone(),
        })
    }

    /// Perform one GET against a compiled query, returning the raw status
    /// and body for the decoder. Never retries.
    pub async fn fetch(&self, query: &str) -> QueryResult<(u16, String)> {
        let mut req = self.http_client.get_client().get(query);

        if let Some(auth) = &self.basic_auth {
            req = req.basic_auth(&auth.username, Some(&auth.password));
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok((status, body))
    }
}
