//! Webhook endpoint handlers.
//!
//! The Sentry handler runs the whole translation inline:
//! 1. Reject anything but POST
//! 2. Resolve the GitHub target from configuration (fail closed)
//! 3. Normalize and classify the event
//! 4. Dispatch once and report the outcome

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::dispatch::GitHubDispatcher;
use crate::error::{BridgeError, Result};
use crate::event::{classify, normalize, DispatchPayload};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: GitHubDispatcher,
}

impl AppState {
    pub fn new(config: Config, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: GitHubDispatcher::new(client),
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Sentry Webhook
// =============================================================================

/// Successful (non-error) result of handling a webhook.
#[derive(Debug)]
pub enum Outcome {
    /// Action not on the allow-list; nothing was forwarded
    Ignored { action: Option<Value> },
    /// GitHub accepted the dispatch
    Dispatched {
        event_id: Option<String>,
        issue_id: Option<String>,
    },
}

#[derive(Serialize)]
pub struct IgnoredResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchedResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Ignored { action } => (
                StatusCode::OK,
                Json(IgnoredResponse {
                    message: "Event ignored",
                    action,
                }),
            )
                .into_response(),
            Outcome::Dispatched { event_id, issue_id } => (
                StatusCode::OK,
                Json(DispatchedResponse {
                    success: true,
                    message: "GitHub Actions triggered",
                    event_id,
                    issue_id,
                }),
            )
                .into_response(),
        }
    }
}

/// Sentry webhook endpoint.
///
/// Routed for every method so that non-POST requests get a JSON 405 body
/// instead of the router's empty one.
pub async fn sentry_webhook(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Outcome> {
    if method != Method::POST {
        warn!(method = %method, "sentry_webhook_method_not_allowed");
        return Err(BridgeError::MethodNotAllowed);
    }

    let target = state.config.dispatch_target().ok_or_else(|| {
        error!(
            token_configured = state.config.github_token.is_some(),
            owner_configured = state.config.github_owner.is_some(),
            repo_configured = state.config.github_repo.is_some(),
            "server_configuration_missing"
        );
        BridgeError::MissingConfig
    })?;

    let payload: Value = serde_json::from_slice(&body)?;

    info!(body_length = body.len(), "sentry_webhook_received");
    debug!(payload = %payload, "sentry_webhook_payload");

    let event = normalize(&payload);

    info!(
        event_id = ?event.event_id,
        issue_id = ?event.issue_id,
        title = ?event.title,
        level = ?event.level,
        project = ?event.project,
        action = ?event.action,
        "sentry_event_parsed"
    );

    let kind = classify(event.action.as_ref());
    if !kind.is_forwarded() {
        info!(action = ?event.action, "sentry_event_ignored");
        return Ok(Outcome::Ignored {
            action: event.action,
        });
    }

    let dispatch = DispatchPayload::new(&event);
    state.dispatcher.dispatch(&target, &dispatch).await?;

    info!(
        event_id = ?event.event_id,
        issue_id = ?event.issue_id,
        action_kind = ?kind,
        "sentry_event_forwarded"
    );

    Ok(Outcome::Dispatched {
        event_id: event.event_id,
        issue_id: event.issue_id,
    })
}
