//! Sentry event translation module.
//!
//! This module turns an untyped Sentry webhook body into the payload sent to
//! GitHub:
//!
//! ```text
//! serde_json::Value → normalize() → NormalizedEvent → classify() → DispatchPayload
//! ```

pub mod action;
pub mod extract;
pub mod types;

pub use action::{classify, ActionKind, FORWARDED_ACTIONS};
pub use extract::normalize;
pub use types::{ClientPayload, DispatchPayload, NormalizedEvent, DISPATCH_EVENT_TYPE};
