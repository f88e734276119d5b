//! Errors returned to clients of the proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Upstream failure, rendered as a plain-text body with the mapped status.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("SWAPI returned non-200 status: {0}")]
    UpstreamStatus(u16),
    #[error("Error making request to SWAPI: {0}")]
    Request(String),
    #[error("Error decoding SWAPI response: {0}")]
    Decode(String),
    #[error("Invalid response format from SWAPI: missing or invalid 'results' field")]
    MissingResults,
    #[error("Invalid item format in results")]
    InvalidItem,
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Upstream status is mirrored; anything unrepresentable becomes a bad gateway.
            Self::UpstreamStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Request(_) | Self::Decode(_) | Self::MissingResults | Self::InvalidItem => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "Proxy request failed");
        } else {
            tracing::warn!(%status, error = %self, "Proxy request failed");
        }
        (status, format!("{self}\n")).into_response()
    }
}
