//! Axum router construction.
//!
//! [`build`] assembles the complete application router:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - The page shell at `/`
//! - The `/todos` fragment endpoints
//! - HTML fallbacks for unknown paths and methods

mod todos;

use axum::http::StatusCode;
use axum::response::Html;
use axum::{middleware, Router};
use std::sync::Arc;
use todo_render::error_fragment;
use tower::ServiceBuilder;

use crate::middleware::{cors, trace};
use crate::state::AppState;
use crate::store::TodoStore;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build<S: TodoStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .merge(todos::router())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Each `.layer` wraps everything above it: trace runs first, then CORS.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(&state.config)))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(error_fragment("not found")))
}

async fn method_not_allowed() -> (StatusCode, Html<String>) {
    (StatusCode::METHOD_NOT_ALLOWED, Html(error_fragment("method not allowed")))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
