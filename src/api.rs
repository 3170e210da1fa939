//! HTTP surface: `GET /api/scrape?keyword=<q>`.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{Method, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::fetcher::Fetcher;
use crate::models::Product;
use crate::parser;

#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<Fetcher>,
}

pub fn create_app(config: &ScraperConfig) -> Result<Router> {
    let state = AppState {
        fetcher: Arc::new(Fetcher::new(config)?),
    };

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.origin_header()?]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    Ok(Router::new()
        .route("/api/scrape", get(scrape_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn scrape_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> std::result::Result<Response, ScrapeError> {
    let keyword = match first_keyword(&params) {
        Some(k) if !k.trim().is_empty() => k,
        _ => {
            tracing::debug!("rejecting scrape without keyword");
            return Err(ScrapeError::MissingKeyword);
        }
    };

    tracing::info!(keyword, "scrape requested");

    let products = scrape(&state.fetcher, keyword).await.inspect_err(|e| {
        tracing::error!(keyword, error = %e, "scrape failed");
    })?;

    let body = serde_json::to_vec(&products).map_err(|e| ScrapeError::Encode(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// First `keyword` value wins when the parameter is repeated.
fn first_keyword(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(name, _)| name == "keyword")
        .map(|(_, value)| value.as_str())
}

async fn scrape(fetcher: &Fetcher, keyword: &str) -> Result<Vec<Product>> {
    let html = fetcher.fetch_html(keyword).await?;
    parser::parse_products(&html)
}
