//! API route handlers.

mod root;
mod solve;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::types::AppState;

/// Origin allowed by default (the Vite dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// CORS policy for a single credentialed origin.
///
/// Credentials rule out wildcards, so methods and headers are mirrored from
/// the preflight request instead. The origin is a one-entry list so that
/// other origins get no `Access-Control-Allow-Origin` header at all.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin([origin])
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Create the API router with all endpoints.
pub fn create_router(state: Arc<AppState>, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/", get(root::root_handler))
        .route("/solve", post(solve::solve_handler))
        // Request tracing (enable with RUST_LOG=tower_http=info or higher)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(allowed_origin))
        .with_state(state)
}
