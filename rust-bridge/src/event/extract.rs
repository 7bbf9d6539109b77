//! Field extraction from untyped Sentry webhook bodies.
//!
//! Sentry delivers two payload shapes depending on the webhook resource:
//! an error/event alert (`data.event`) and an issue alert (`data.issue`).
//! Each normalized field is described by an ordered list of candidate paths;
//! the first path holding a usable value wins.

use serde_json::Value;
use tracing::debug;

use super::types::NormalizedEvent;

/// A path into the webhook body, one object key per segment.
type Path = &'static [&'static str];

/// Ordered candidate paths for one normalized field.
struct FieldRule {
    field: &'static str,
    paths: &'static [Path],
}

const EVENT_ID: FieldRule = FieldRule {
    field: "event_id",
    paths: &[&["data", "event", "event_id"], &["data", "issue", "id"]],
};

const ISSUE_ID: FieldRule = FieldRule {
    field: "issue_id",
    paths: &[&["data", "issue", "id"]],
};

const TITLE: FieldRule = FieldRule {
    field: "title",
    paths: &[&["data", "event", "title"], &["data", "issue", "title"]],
};

const CULPRIT: FieldRule = FieldRule {
    field: "culprit",
    paths: &[&["data", "event", "culprit"], &["data", "issue", "culprit"]],
};

const LEVEL: FieldRule = FieldRule {
    field: "level",
    paths: &[&["data", "event", "level"], &["data", "issue", "level"]],
};

const PROJECT: FieldRule = FieldRule {
    field: "project",
    paths: &[
        &["data", "event", "project"],
        &["data", "issue", "project", "slug"],
    ],
};

const PERMALINK: FieldRule = FieldRule {
    field: "permalink",
    paths: &[&["data", "event", "web_url"], &["data", "issue", "permalink"]],
};

/// Build a [`NormalizedEvent`] from a webhook body.
///
/// Never fails: any missing or unusable path simply yields `None`.
pub fn normalize(body: &Value) -> NormalizedEvent {
    NormalizedEvent {
        event_id: resolve(body, &EVENT_ID),
        issue_id: resolve(body, &ISSUE_ID),
        title: resolve(body, &TITLE),
        culprit: resolve(body, &CULPRIT),
        level: resolve(body, &LEVEL),
        project: resolve(body, &PROJECT),
        permalink: resolve(body, &PERMALINK),
        action: body.get("action").cloned(),
    }
}

/// Walk `path` through nested objects.
///
/// Returns `None` as soon as a segment is missing or the current node is not
/// an object.
pub fn lookup<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(body, |node, key| node.as_object()?.get(*key))
}

/// Render a leaf as a field value.
///
/// Non-empty strings and numbers are usable; everything else falls through to
/// the next candidate.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn resolve(body: &Value, rule: &FieldRule) -> Option<String> {
    let found = rule
        .paths
        .iter()
        .enumerate()
        .find_map(|(rank, path)| lookup(body, path).and_then(scalar).map(|v| (rank, v)));

    found.map(|(rank, value)| {
        debug!(field = rule.field, candidate = rank, "event_field_resolved");
        value
    })
}
