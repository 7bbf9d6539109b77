//! Outbound forwarding to GitHub.
//!
//! A single `repository_dispatch` call per accepted webhook, with no retry.

pub mod github;

pub use github::{GitHubDispatcher, ACCEPT_GITHUB_JSON, CLIENT_USER_AGENT};
