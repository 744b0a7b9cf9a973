//! Request extractors that report rejections through [`Error`].
//!
//! Axum's own `Path` and `Query` answer malformed input with plain-text 400s; these
//! wrappers turn the rejection into `Error::Validation` so every failure shares the
//! JSON error body.

use crate::errors::Error;
use axum::extract::{
    FromRequestParts,
    rejection::{PathRejection, QueryRejection},
};

/// `axum::extract::Path` with rejections mapped to [`Error::Validation`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ValidPath<T>(pub T);

/// `axum::extract::Query` with rejections mapped to [`Error::Validation`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ValidQuery<T>(pub T);

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}
