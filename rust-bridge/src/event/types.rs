//! Normalized event and GitHub dispatch payload types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// `event_type` sent with every repository_dispatch call.
pub const DISPATCH_EVENT_TYPE: &str = "sentry_error";

/// Shape-independent view of a Sentry webhook.
///
/// Built fresh for every request and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    pub event_id: Option<String>,
    pub issue_id: Option<String>,
    pub title: Option<String>,
    pub culprit: Option<String>,
    pub level: Option<String>,
    pub project: Option<String>,
    pub permalink: Option<String>,
    /// Top-level `action`, kept verbatim. `None` means the key was absent,
    /// `Some(Value::Null)` means it was explicitly null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,
}

/// Body of `POST /repos/{owner}/{repo}/dispatches`.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchPayload {
    pub event_type: &'static str,
    pub client_payload: ClientPayload,
}

/// Fields handed to the triggered workflow as `github.event.client_payload`.
#[derive(Debug, Clone, Serialize)]
pub struct ClientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentry_event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentry_issue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_culprit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
}

impl DispatchPayload {
    /// Build the payload for an event, stamped with the current time.
    pub fn new(event: &NormalizedEvent) -> Self {
        Self::at(event, Utc::now())
    }

    /// Build the payload for an event with an explicit generation time.
    pub fn at(event: &NormalizedEvent, generated_at: DateTime<Utc>) -> Self {
        Self {
            event_type: DISPATCH_EVENT_TYPE,
            client_payload: ClientPayload {
                sentry_event_id: event.event_id.clone(),
                sentry_issue_id: event.issue_id.clone(),
                error_title: event.title.clone(),
                error_culprit: event.culprit.clone(),
                error_level: event.level.clone(),
                project: event.project.clone(),
                permalink: event.permalink.clone(),
                timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}
