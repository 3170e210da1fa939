//! Server and scraper settings.
//!
//! There is no file, env or flag surface; [`ScraperConfig::default`] is what
//! the binary runs with and tests override individual fields.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use url::Url;

use crate::error::ScrapeError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub bind_addr: SocketAddr,
    /// The only origin allowed by the CORS policy.
    pub allowed_origin: String,
    /// Search endpoint; the keyword is appended as the `k` query parameter.
    pub search_base_url: String,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            allowed_origin: "http://localhost:5173".into(),
            search_base_url: "https://www.amazon.com.br/s".into(),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl ScraperConfig {
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.user_agent.trim().is_empty() {
            return Err(ScrapeError::Request("user_agent must not be empty".into()));
        }
        Url::parse(&self.search_base_url).map_err(|e| {
            ScrapeError::Request(format!(
                "invalid search_base_url {:?}: {e}",
                self.search_base_url
            ))
        })?;
        self.origin_header()?;
        Ok(())
    }

    pub fn origin_header(&self) -> Result<HeaderValue, ScrapeError> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|e| {
            ScrapeError::Request(format!(
                "invalid allowed_origin {:?}: {e}",
                self.allowed_origin
            ))
        })
    }
}
