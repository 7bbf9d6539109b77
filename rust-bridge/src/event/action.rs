//! Classification of the webhook `action` field.

use serde_json::Value;

/// Actions that trigger a dispatch. Anything else is ignored.
pub const FORWARDED_ACTIONS: [&str; 2] = ["created", "first_seen"];

/// Outcome of classifying an `action` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// A new issue was created
    Created,
    /// An issue was seen for the first time
    FirstSeen,
    /// Absent, null, non-string, or not on the allow-list
    Ignored,
}

impl ActionKind {
    /// Whether this action should be forwarded to GitHub.
    pub fn is_forwarded(self) -> bool {
        !matches!(self, ActionKind::Ignored)
    }
}

/// Classify a raw `action` value against the fixed allow-list.
pub fn classify(action: Option<&Value>) -> ActionKind {
    match action.and_then(Value::as_str) {
        Some("created") => ActionKind::Created,
        Some("first_seen") => ActionKind::FirstSeen,
        _ => ActionKind::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_forwarded() {
        assert_eq!(classify(Some(&json!("created"))), ActionKind::Created);
        assert_eq!(classify(Some(&json!("first_seen"))), ActionKind::FirstSeen);
        for action in FORWARDED_ACTIONS {
            assert!(classify(Some(&json!(action))).is_forwarded());
        }
    }

    #[test]
    fn test_classify_ignored() {
        assert_eq!(classify(None), ActionKind::Ignored);
        assert_eq!(classify(Some(&Value::Null)), ActionKind::Ignored);
        assert_eq!(classify(Some(&json!("resolved"))), ActionKind::Ignored);
        assert_eq!(classify(Some(&json!("Created"))), ActionKind::Ignored);
        assert_eq!(classify(Some(&json!(["created"]))), ActionKind::Ignored);
        assert!(!ActionKind::Ignored.is_forwarded());
    }
}
