//! Error taxonomy for the webhook bridge.
//!
//! Every failure is terminal for the request that caused it. The
//! [`IntoResponse`] impl is the single place where a failure becomes an HTTP
//! status and JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result alias used throughout the request path.
pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Any method other than POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Token, owner or repository is not configured
    #[error("Server configuration error")]
    MissingConfig,

    /// GitHub answered with a non-2xx status
    #[error("GitHub API returned status {status}")]
    Downstream { status: u16, body: String },

    /// Malformed body, transport failure, invalid API URL
    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::Internal(e.to_string())
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(e: reqwest::Error) -> Self {
        BridgeError::Internal(e.to_string())
    }
}

impl From<url::ParseError> for BridgeError {
    fn from(e: url::ParseError) -> Self {
        BridgeError::Internal(format!("invalid GitHub API URL: {}", e))
    }
}

/// JSON body for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    fn new(error: &'static str) -> Self {
        Self {
            error,
            message: None,
            details: None,
            status: None,
        }
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            BridgeError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new("Method not allowed"),
            ),
            BridgeError::MissingConfig => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Server configuration error"),
            ),
            BridgeError::Downstream { status, body } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    details: Some(body),
                    status: Some(status),
                    ..ErrorResponse::new("Failed to trigger GitHub Actions")
                },
            ),
            BridgeError::Internal(message) => {
                error!(error = %message, "webhook_internal_error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: Some(message),
                        ..ErrorResponse::new("Internal server error")
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
