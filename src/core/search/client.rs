//! HTTP client for the `/search` endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::core::app;
use crate::core::config::Config;
use crate::core::error::SearchError;
use crate::core::query::Query;

/// Hard limit on the whole request/response cycle, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Asks the server for the results fragment only, not the full page layout.
pub const FRAGMENT_HEADER: &str = "HX-Request";

const SEARCH_PATH: &str = "search";

/// Client bound to one base URL. Cheap to build; one instance serves one invocation.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let http = Client::builder().user_agent(app::USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `<base>/search?q=<free text>&c=<capability>...`
    pub fn search_url(&self, query: &Query) -> Result<Url, SearchError> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), SEARCH_PATH);
        let mut url = Url::parse(&raw).map_err(|source| SearchError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &query.free_text);
            for capability in &query.capabilities {
                pairs.append_pair("c", capability);
            }
        }
        Ok(url)
    }

    /// Run one search and return the raw response body.
    ///
    /// The response (and its connection) is released before this returns, on every path.
    /// A non-200 status fails without reading the body.
    pub async fn search(&self, query: &Query) -> Result<Vec<u8>, SearchError> {
        let url = self.search_url(query)?;
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(FRAGMENT_HEADER, "true")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Response status: {}", status);
        if status != StatusCode::OK {
            return Err(SearchError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        log::debug!("Read {} byte response body", body.len());
        Ok(body.to_vec())
    }
}
