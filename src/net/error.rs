//! Structured error type for gateway requests.
//!
//! ERROR HANDLING
//! ==============
//! Backend rejections keep the server's `detail` message verbatim so pages
//! can show it unmodified; transport and decode failures carry a plain
//! description. Nothing at this layer retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ErrorBody;

/// Failure of a single gateway request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{detail}")]
    Status {
        status: u16,
        /// Human-readable message from the backend's error body.
        detail: String,
        /// Optional machine-readable code from the backend.
        code: Option<String>,
    },
    /// The request never produced a response (offline, DNS, aborted).
    #[error("transport error: {0}")]
    Transport(String),
    /// The response arrived but its body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a response status and raw body.
    ///
    /// Falls back to a generic message when the body is not the backend's
    /// `{detail, code?}` shape (e.g. a proxy's HTML error page).
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::Status {
                status,
                detail: parsed.detail,
                code: parsed.code,
            },
            Err(_) => Self::Status {
                status,
                detail: format!("request failed: {status}"),
                code: None,
            },
        }
    }

    /// Status code of a backend rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
