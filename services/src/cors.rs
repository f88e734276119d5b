//! Origin check for browser clients.
//!
//! Requests without an `Origin` header pass through untouched. The
//! configured host is accepted over `http` and `https`; every other origin
//! gets a bare 403. Preflight requests from an accepted origin end here
//! with 204.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Host (without scheme) whose origins are accepted.
#[derive(Debug, Clone)]
pub struct AllowedOrigin(pub String);

impl AllowedOrigin {
    pub fn matches(&self, origin: &str) -> bool {
        origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
            .is_some_and(|host| host == self.0)
    }
}

pub async fn enforce(
    State(allowed): State<AllowedOrigin>,
    request: Request,
    next: Next,
) -> Response {
    let Some(origin) = request.headers().get(header::ORIGIN).cloned() else {
        return next.run(request).await;
    };

    let accepted = origin.to_str().is_ok_and(|origin| allowed.matches(origin));
    if !accepted {
        tracing::warn!(?origin, "Rejected request from disallowed origin");
        return StatusCode::FORBIDDEN.into_response();
    }

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_headers(response.headers_mut(), origin);
        return response;
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), origin);
    response
}

fn apply_headers(headers: &mut HeaderMap, origin: HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_schemes_match() {
        let allowed = AllowedOrigin("localhost:3000".to_string());
        assert!(allowed.matches("http://localhost:3000"));
        assert!(allowed.matches("https://localhost:3000"));
        assert!(!allowed.matches("http://localhost:3001"));
        assert!(!allowed.matches("localhost:3000"));
        assert!(!allowed.matches("ftp://localhost:3000"));
    }
}
