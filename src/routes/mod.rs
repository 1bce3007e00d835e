//! HTTP route handlers.
//!
//! Each route group carries its own Cache-Control header: the index payload is
//! static and cacheable, while generated passwords and random placeholders are
//! marked `no-store`.
//!
//! Request tracing is enabled via middleware that assigns a request ID to
//! every incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod index;
pub mod password;
pub mod placeholders;

use axum::{
    middleware,
    response::Redirect,
    routing::{any, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_INDEX, CACHE_CONTROL_NO_STORE};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Route that redirects to `target` with 307, preserving method and body.
fn redirect_to(target: &'static str) -> axum::routing::MethodRouter<AppState> {
    any(move || async move { Redirect::temporary(target) })
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let index_routes = Router::new().route("/", get(index::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_INDEX),
        ),
    );

    // Every response is random, never cache
    let generated_routes = Router::new()
        .route("/generate-password/", post(password::generate))
        .route("/placeholders/", get(placeholders::random))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Canonical paths end with a slash
    let slash_redirects = Router::new()
        .route("/generate-password", redirect_to("/generate-password/"))
        .route("/placeholders", redirect_to("/placeholders/"));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(index_routes)
        .merge(generated_routes)
        .merge(slash_redirects)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
