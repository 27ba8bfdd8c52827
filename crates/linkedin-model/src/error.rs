use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The payload the OAuth endpoints return when a request fails, e.g.
/// `{"error": "invalid_request", "error_description": "..."}`.
///
/// The presence of the `error` field is what distinguishes a failed
/// exchange from a token response, so deserializing a successful response
/// into this type fails.
#[derive(Clone, Debug, Deserialize, Error, PartialEq, Eq, Serialize)]
#[error("{error}: {}", .error_description.as_deref().unwrap_or("no description"))]
pub struct OAuthError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_description: Option<String>,
}

/// Groups up the kinds of errors that may happen in the model layer.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("json parse error: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),
}
