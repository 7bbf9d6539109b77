//! Sentry → GitHub bridge.
//!
//! Receives Sentry issue alert webhooks and triggers GitHub Actions through
//! a `repository_dispatch` event.
//!
//! ## Flow
//!
//! ```text
//! Sentry → POST /api/sentry-webhook → normalize → classify → POST /repos/{owner}/{repo}/dispatches
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod web;

// Re-export commonly used types
pub use config::{Config, DispatchTarget};
pub use dispatch::GitHubDispatcher;
pub use error::BridgeError;
pub use event::{normalize, DispatchPayload, NormalizedEvent};
pub use web::{router, AppState};
