//! GitHub `repository_dispatch` client.

use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client,
};
use tracing::{error, info};
use url::Url;

use crate::config::DispatchTarget;
use crate::error::{BridgeError, Result};
use crate::event::DispatchPayload;

/// Media type for GitHub REST v3 responses.
pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// Fixed client identifier sent as `User-Agent`.
pub const CLIENT_USER_AGENT: &str = "Sentry-GitHub-Bridge";

/// Sends dispatch payloads to GitHub.
///
/// Cloning is cheap; the underlying `reqwest::Client` shares its pool.
#[derive(Clone)]
pub struct GitHubDispatcher {
    client: Client,
}

impl GitHubDispatcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build `{api_url}/repos/{owner}/{repo}/dispatches`.
    pub fn dispatch_url(target: &DispatchTarget) -> Result<Url> {
        let mut url = Url::parse(&target.api_url)?;

        url.path_segments_mut()
            .map_err(|_| {
                BridgeError::Internal(format!(
                    "invalid GitHub API URL: {} cannot be a base",
                    target.api_url
                ))
            })?
            .pop_if_empty()
            .extend([
                "repos",
                target.owner.as_str(),
                target.repo.as_str(),
                "dispatches",
            ]);

        Ok(url)
    }

    /// POST the payload once.
    ///
    /// A non-2xx answer becomes [`BridgeError::Downstream`] carrying the
    /// response text; transport failures become [`BridgeError::Internal`].
    pub async fn dispatch(&self, target: &DispatchTarget, payload: &DispatchPayload) -> Result<()> {
        let url = Self::dispatch_url(target)?;

        info!(
            url = %url,
            event_type = payload.event_type,
            sentry_issue_id = ?payload.client_payload.sentry_issue_id,
            "github_dispatch_starting"
        );

        let response = self
            .client
            .post(url.clone())
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .header(AUTHORIZATION, format!("token {}", target.token))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(
                    url = %url,
                    is_timeout = e.is_timeout(),
                    is_connect = e.is_connect(),
                    error = %e,
                    "github_dispatch_request_error"
                );
                BridgeError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!(
                status_code = status.as_u16(),
                body = %body,
                "github_dispatch_failed"
            );
            return Err(BridgeError::Downstream {
                status: status.as_u16(),
                body,
            });
        }

        info!(status_code = status.as_u16(), "github_dispatch_complete");

        Ok(())
    }
}
