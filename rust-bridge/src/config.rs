//! Configuration module for environment variable parsing.
//!
//! Everything is read once in the binary and injected into the handlers
//! through `AppState`, so the request path never touches the process
//! environment.

use std::env;
use tracing::warn;

/// Default GitHub REST API base URL.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default port for the web server.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// GitHub token used for the dispatch call
    pub github_token: Option<String>,

    /// Owner (user or organization) of the target repository
    pub github_owner: Option<String>,

    /// Name of the target repository
    pub github_repo: Option<String>,

    /// Base URL of the GitHub REST API
    pub github_api_url: String,
}

/// The fully resolved forwarding target.
///
/// Only obtainable through [`Config::dispatch_target`], which refuses to
/// build one from partial configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTarget {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The three GitHub settings are not validated here. A server with
    /// missing settings still starts and answers each webhook with a
    /// configuration error.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            github_token: read_non_empty("GITHUB_TOKEN"),

            github_owner: read_non_empty("GITHUB_OWNER"),

            github_repo: read_non_empty("GITHUB_REPO"),

            github_api_url: read_non_empty("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        }
    }

    /// Resolve the forwarding target, or `None` if any required setting is absent.
    pub fn dispatch_target(&self) -> Option<DispatchTarget> {
        let token = non_empty(self.github_token.as_deref())?;
        let owner = non_empty(self.github_owner.as_deref())?;
        let repo = non_empty(self.github_repo.as_deref())?;

        Some(DispatchTarget {
            token: token.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            api_url: self.github_api_url.clone(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read an environment variable, treating blank values as unset.
fn read_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        Ok(_) => {
            warn!(env_var = name, "Blank environment variable, treating as unset");
            None
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Config {
        Config {
            port: DEFAULT_PORT,
            github_token: Some("ghp_test".to_string()),
            github_owner: Some("acme".to_string()),
            github_repo: Some("widgets".to_string()),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
        }
    }

    #[test]
    fn test_dispatch_target_complete() {
        let target = full_config().dispatch_target().unwrap();
        assert_eq!(target.token, "ghp_test");
        assert_eq!(target.owner, "acme");
        assert_eq!(target.repo, "widgets");
        assert_eq!(target.api_url, "https://api.github.com");
    }

    #[test]
    fn test_dispatch_target_any_missing() {
        let mut config = full_config();
        config.github_token = None;
        assert!(config.dispatch_target().is_none());

        let mut config = full_config();
        config.github_owner = None;
        assert!(config.dispatch_target().is_none());

        let mut config = full_config();
        config.github_repo = None;
        assert!(config.dispatch_target().is_none());
    }

    #[test]
    fn test_dispatch_target_blank_is_missing() {
        let mut config = full_config();
        config.github_repo = Some("  ".to_string());
        assert!(config.dispatch_target().is_none());
    }

    #[test]
    fn test_read_non_empty() {
        env::set_var("TEST_BRIDGE_SET", " value ");
        env::set_var("TEST_BRIDGE_BLANK", "   ");
        assert_eq!(read_non_empty("TEST_BRIDGE_SET"), Some("value".to_string()));
        assert_eq!(read_non_empty("TEST_BRIDGE_BLANK"), None);
        assert_eq!(read_non_empty("TEST_BRIDGE_NONEXISTENT"), None);
        env::remove_var("TEST_BRIDGE_SET");
        env::remove_var("TEST_BRIDGE_BLANK");
    }
}
