//! Error types for the plant proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for the proxy's HTTP surface.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Upstream answered with a non-success status, relayed as-is
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Upstream could not be reached or returned an unreadable body
    #[error("Internal error: {0}")]
    Internal(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

// == Upstream Error Enum ==
/// Failure modes of a single call to the Trefle API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream responded with a non-2xx status
    #[error("Trefle API responded with {status}: {reason}")]
    Status { status: StatusCode, reason: String },

    /// Connection, timeout, body read or JSON decode failure.
    /// The request URL is stripped since it carries the token.
    #[error("Trefle API request failed: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.without_url())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProxyError::Upstream { status, message } => (status, message),
            ProxyError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ProxyError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the plant proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
