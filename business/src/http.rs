//! Platform-abstracted GET client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it holds JS types
//! (`JsValue`, `JsFuture`, ...). To keep a single `Send` future type for both
//! targets:
//! - On **native**: use reqwest directly (futures are Send)
//! - On **WASM**: run the request on the JS thread via
//!   `wasm_bindgen_futures::spawn_local` and hand the result back through a
//!   `flume` channel (which is Send-safe)

use std::collections::HashMap;

use thiserror::Error;

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, Clone, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A builder for GET requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Append query-string pairs, preserving their order.
    pub fn query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Send the request and return a Send-safe future.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::execute(self.url, self.query, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

        let Self {
            url,
            query,
            headers,
        } = self;

        // This closure is NOT Send, but spawn_local doesn't require Send
        wasm_bindgen_futures::spawn_local(async move {
            let result = Self::execute(url, query, headers).await;
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }

    async fn execute(
        url: String,
        query: Vec<(String, String)>,
        headers: HashMap<String, String>,
    ) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = client.get(&url).query(&query);
        for (name, value) in &headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        // Extract status and headers before consuming the response
        let status = response.status().as_u16();
        let mut response_headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                response_headers.insert(name.as_str().to_lowercase(), v.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers: response_headers,
            body,
        })
    }
}

/// Entry point for building requests.
///
/// ```ignore
/// use holocron_business::http::Client;
///
/// let response = Client::get("http://localhost:8080/api/people")
///     .query([("page", "1")])
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}
