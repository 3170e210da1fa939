//! Failures of the scrape pipeline and how they surface over HTTP.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that abort a single scrape request.
///
/// Only a missing keyword is the caller's fault; every other stage failure
/// is reported as a 500 with a message naming the stage.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("the keyword query parameter is required")]
    MissingKeyword,

    #[error("failed to build search request: {0}")]
    Request(String),

    #[error("failed to fetch search page: {0}")]
    Transport(String),

    #[error("upstream returned unexpected status: {code} {reason}")]
    UpstreamStatus { code: u16, reason: String },

    #[error("failed to parse search page: {0}")]
    Parse(String),

    #[error("failed to encode response: {0}")]
    Encode(String),
}

impl ScrapeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingKeyword => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keyword_is_bad_request() {
        assert_eq!(
            ScrapeError::MissingKeyword.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn pipeline_failures_are_internal_errors() {
        let errors = [
            ScrapeError::Request("bad url".into()),
            ScrapeError::Transport("connection refused".into()),
            ScrapeError::UpstreamStatus {
                code: 503,
                reason: "Service Unavailable".into(),
            },
            ScrapeError::Parse("truncated body".into()),
            ScrapeError::Encode("bad float".into()),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn display_upstream_status_includes_code() {
        let err = ScrapeError::UpstreamStatus {
            code: 503,
            reason: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "upstream returned unexpected status: 503 Service Unavailable"
        );
    }

    #[test]
    fn into_response_keeps_status() {
        let response = ScrapeError::Transport("timed out".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScrapeError>();
    }
}
