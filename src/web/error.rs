//! HTTP rendering of [`Error`].
//!
//! Every handler error is reported the same way: a JSON body
//! `{"error": "...", "kind": "..."}` with a status derived from the error kind.

use crate::errors::{Error, ErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description
    pub error: String,
    /// Kind tag, e.g. `"validation"`
    pub kind: ErrorKind,
}

impl ErrorKind {
    /// HTTP status used when an error of this kind reaches a client.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::QueryFailed | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = kind.status_code();

        if status.is_server_error() {
            error!(kind = kind.as_str(), "Request failed: {}", self);
        } else {
            warn!(kind = kind.as_str(), "Request rejected: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
            kind,
        };
        (status, Json(body)).into_response()
    }
}
