//! Unified error type for the sensor dashboard.
//!
//! Every failure that can reach an HTTP client is one of these variants, and each
//! variant carries a [`ErrorKind`] tag that decides how it is reported.

use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Coarse classification of an [`Error`], serialized into error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The request carried missing or malformed input
    Validation,
    /// The store could not be reached or no connection could be acquired
    StoreUnavailable,
    /// The store was reachable but the statement failed
    QueryFailed,
    /// Configuration, I/O or rendering failure inside the server
    Internal,
}

impl ErrorKind {
    /// The tag used in serialized error payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::StoreUnavailable => "store-unavailable",
            Self::QueryFailed => "query-failed",
            Self::Internal => "internal",
        }
    }
}

/// Application error, tagged by [`ErrorKind`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    Validation { message: String },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {message}")]
    Render { message: String },
}

impl Error {
    /// Returns the kind tag for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::StoreUnavailable { .. } => ErrorKind::StoreUnavailable,
            Self::QueryFailed { .. } => ErrorKind::QueryFailed,
            Self::Config { .. } | Self::Io(_) | Self::Render { .. } => ErrorKind::Internal,
        }
    }
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        match value {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::StoreUnavailable {
                message: value.to_string(),
            },
            other => Self::QueryFailed {
                message: other.to_string(),
            },
        }
    }
}

impl From<askama::Error> for Error {
    fn from(value: askama::Error) -> Self {
        Self::Render {
            message: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Render {
            message: value.to_string(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_connection_errors_are_store_unavailable() {
        let err: Error = DbErr::Conn(RuntimeErr::Internal("refused".to_string())).into();
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_other_db_errors_are_query_failed() {
        let err: Error = DbErr::Query(RuntimeErr::Internal("no such table".to_string())).into();
        assert_eq!(err.kind(), ErrorKind::QueryFailed);

        let err: Error = DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::QueryFailed);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ErrorKind::Validation.as_str(), "validation");
        assert_eq!(ErrorKind::StoreUnavailable.as_str(), "store-unavailable");
        assert_eq!(ErrorKind::QueryFailed.as_str(), "query-failed");
        assert_eq!(
            serde_json::to_string(&ErrorKind::StoreUnavailable).ok().as_deref(),
            Some("\"store-unavailable\"")
        );
    }

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = Error::Validation {
            message: "Missing 'value' query parameter".to_string(),
        };
        assert_eq!(err.to_string(), "Missing 'value' query parameter");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
