use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{any, get},
};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::cors::AllowedOrigin;
use crate::error::ProxyError;
use crate::swapi::{ListParams, SwapiClient};

pub mod config;
pub mod cors;
pub mod error;
pub mod swapi;
pub mod telemetry;

/// Shared by every handler; cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub swapi: SwapiClient,
    pub config: Config,
}

/// Builds the proxy router: SWAPI list endpoints under `/api`, a health
/// check, and the origin check wrapped around all of it.
pub fn routes(config: Config) -> Router {
    let state = AppState {
        swapi: SwapiClient::new(config.base_url()),
        config: config.clone(),
    };
    let allowed = AllowedOrigin(config.allowed_origin().to_string());

    let api_routes = Router::new()
        .route("/people", get(list_people))
        .route("/planets", get(list_planets));

    Router::new()
        .route("/is-health", get(health_check))
        .nest("/api", api_routes)
        .fallback(any(catch_all))
        .with_state(state)
        .layer(middleware::from_fn_with_state(allowed, cors::enforce))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                )
            }),
        )
}

async fn list_people(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ProxyError> {
    state.swapi.list("people", &params).await.map(Json)
}

async fn list_planets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ProxyError> {
    state.swapi.list("planets", &params).await.map(Json)
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, "OK").into_response();

    if let Ok(env_value) = HeaderValue::from_str(&state.config.environment().to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-service-env"), env_value);
    }
    response.headers_mut().insert(
        HeaderName::from_static("x-service-version"),
        HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
    );

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
