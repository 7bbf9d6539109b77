//! Web server module for handling inbound Sentry webhooks.
//!
//! The server is stateless apart from the injected configuration and the
//! shared HTTP client:
//! - Receives webhooks from Sentry
//! - Forwards new issues to GitHub as a repository_dispatch event
//! - Reports the outcome of each delivery as JSON

pub mod handlers;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{
    health, sentry_webhook, AppState, DispatchedResponse, HealthResponse, IgnoredResponse,
    Outcome,
};

/// Path Sentry delivers webhooks to.
pub const SENTRY_WEBHOOK_PATH: &str = "/api/sentry-webhook";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(SENTRY_WEBHOOK_PATH, any(sentry_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
