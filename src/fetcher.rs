use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};

/// Downloads search result pages. Cheap to share: the inner client pools
/// connections across requests.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: Url,
    user_agent: String,
}

impl Fetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let base_url = Url::parse(&config.search_base_url)
            .map_err(|e| ScrapeError::Request(format!("invalid search url: {e}")))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ScrapeError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Search page URL for `keyword`, passed form-encoded as `k`.
    pub fn search_url(&self, keyword: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("k", keyword);
        url
    }

    /// Fetches the raw HTML of the search page. Anything but a 200 is an error.
    pub async fn fetch_html(&self, keyword: &str) -> Result<String> {
        let url = self.search_url(keyword);
        tracing::debug!(%url, "fetching search page");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| ScrapeError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "upstream returned unexpected status");
            return Err(ScrapeError::UpstreamStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::Parse(format!("failed to read response body: {e}")))
    }
}
