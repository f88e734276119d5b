//! Shared test utilities for integration tests.
//!
//! - `upstream()` starts a wiremock server standing in for SWAPI
//! - `create_test_app()` builds the router against it
//! - `send()` runs one request through the router and collects the body

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use holocron_services::{config::Config, routes};
use tower::ServiceExt;
use wiremock::MockServer;

/// Origin accepted by [`Config::new_for_test`].
#[allow(dead_code)]
pub const ALLOWED: &str = "http://localhost:3000";

pub async fn upstream() -> MockServer {
    MockServer::start().await
}

pub fn create_test_app(upstream: &MockServer) -> Router {
    routes(Config::new_for_test(format!("{}/api", upstream.uri())))
}

/// Response status/headers plus the body as text.
pub async fn send(app: Router, request: Request<Body>) -> (Response<()>, String) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    (
        Response::from_parts(parts, ()),
        String::from_utf8_lossy(&bytes).into_owned(),
    )
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn swapi_people() -> serde_json::Value {
    serde_json::json!({
        "count": 82,
        "next": "https://swapi.dev/api/people/?page=2",
        "previous": null,
        "results": [
            { "name": "Luke Skywalker", "height": "172", "created": "2014-12-09T13:50:51.644000Z", "url": "https://swapi.dev/api/people/1/" },
            { "name": "C-3PO", "height": "167", "created": "2014-12-10T15:10:51.357000Z", "url": "https://swapi.dev/api/people/2/" },
            { "name": "R2-D2", "height": "96", "created": "2014-12-10T15:11:50.376000Z", "url": "https://swapi.dev/api/people/3/" }
        ]
    })
}
