//! Error taxonomy for remote calls and its reduction to user-facing messages.
//! Messages surfaced to the UI come from the API's structured error detail
//! when present; bodies are never echoed unbounded.

use serde_json::Value;
use thiserror::Error;

/// Maximum number of error detail characters surfaced to the UI.
const MAX_DETAIL_CHARS: usize = 200;

pub const TRANSPORT_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";
pub const SERVER_MESSAGE: &str = "Server error, please try again later.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("request failed ({status}){}", detail_suffix(.detail.as_deref()))]
    Http { status: u16, detail: Option<String> },
    #[error("response error: {0}")]
    Parse(String),
    #[error("request error: {0}")]
    Serialization(String),
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

/// Coarse classification used to pick the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Validation,
    Authorization,
    Server,
    Unexpected,
}

impl ApiError {
    /// Builds an HTTP error from a status code and the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            detail: extract_detail(body),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) | ApiError::Timeout => ErrorKind::Transport,
            ApiError::Http { status, .. } => match status {
                401 | 403 => ErrorKind::Authorization,
                400..=499 => ErrorKind::Validation,
                500..=599 => ErrorKind::Server,
                _ => ErrorKind::Unexpected,
            },
            ApiError::Config(_) | ApiError::Parse(_) | ApiError::Serialization(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message for the UI. Validation and authorization failures surface the
    /// API detail verbatim, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match (self.kind(), self) {
            (ErrorKind::Transport, _) => TRANSPORT_MESSAGE.to_string(),
            (ErrorKind::Server, _) => SERVER_MESSAGE.to_string(),
            (
                ErrorKind::Validation | ErrorKind::Authorization,
                ApiError::Http {
                    detail: Some(detail),
                    ..
                },
            ) => detail.clone(),
            (ErrorKind::Unexpected, ApiError::Config(message)) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Failure reported by a session-mutating operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn from_api(error: &ApiError, fallback: &str) -> Self {
        Self {
            kind: error.kind(),
            message: error.user_message(fallback),
        }
    }
}

/// Pulls a human-readable detail out of a JSON error body: `message`, then
/// `error`, then the first entry of `errors` (`msg`, `message`, or a string).
/// Non-JSON bodies are used as-is when short and non-empty.
pub fn extract_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let detail = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => detail_from_json(&value)?,
        Err(_) if trimmed.starts_with('<') => return None,
        Err(_) => trimmed.to_string(),
    };

    let detail = detail.trim();
    if detail.is_empty() {
        None
    } else {
        Some(detail.chars().take(MAX_DETAIL_CHARS).collect())
    }
}

fn detail_from_json(value: &Value) -> Option<String> {
    let as_text = |v: &Value| v.as_str().map(str::to_string);

    value
        .get("message")
        .and_then(as_text)
        .or_else(|| value.get("error").and_then(as_text))
        .or_else(|| {
            let first = value.get("errors")?.get(0)?;
            first
                .get("msg")
                .and_then(as_text)
                .or_else(|| first.get("message").and_then(as_text))
                .or_else(|| as_text(first))
        })
}
