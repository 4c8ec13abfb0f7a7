//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the full application: intelligence routes under
//! `/api/intelligence`, a `/health` probe, and the tracing, CORS and timeout
//! layers driven by `ServerConfig`.

pub mod intelligence;

pub use intelligence::{intelligence_router, IntelligenceAppState};

use std::time::Duration;

use axum::{routing::get, Router};
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{Environment, ServerConfig};

/// Builds the application router with all layers applied.
pub fn build_router(state: IntelligenceAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(intelligence::health))
        .nest("/api/intelligence", intelligence_router())
        .with_state(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && server.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
