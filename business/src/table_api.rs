//! Remote table API.
//!
//! The controller only talks to [`TableApi`]; [`HttpTableApi`] is the real
//! implementation over [`crate::http::Client`]. Tests swap in their own.

use async_trait::async_trait;
use thiserror::Error;

use crate::http::Client;
use crate::query::QueryParams;
use crate::row::ResultSet;

/// Why a fetch did not produce a result set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response at all (DNS, connection refused, ...).
    #[error("{0}")]
    Transport(String),
    /// A 2xx response whose body is not a result set.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Error body surfaced verbatim; an empty body falls back to the status.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("API returned status: {status}")
        } else {
            body.to_string()
        };
        Self::Status { status, message }
    }

    /// Text shown in the error banner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[async_trait]
pub trait TableApi: Send + Sync {
    async fn fetch(&self, url: &str, params: &QueryParams) -> Result<ResultSet, FetchError>;
}

/// GET `{url}?search=..&page=..&sortBy=..&order=..`
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTableApi;

#[async_trait]
impl TableApi for HttpTableApi {
    async fn fetch(&self, url: &str, params: &QueryParams) -> Result<ResultSet, FetchError> {
        log::debug!("GET {url} {params:?}");

        let response = Client::get(url)
            .header("accept", "application/json")
            .query(params.pairs())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.message))?;

        if !response.is_success() {
            return Err(FetchError::from_status(response.status, &response.text()));
        }

        response.json::<ResultSet>().map_err(|e| {
            log::warn!(
                "Undecodable body from {url} (content-type {:?})",
                response.header("content-type")
            );
            FetchError::Decode(e.to_string())
        })
    }
}
