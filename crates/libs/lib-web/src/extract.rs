//! # Extractors
//!
//! Query extraction that fails with [`AppError`] instead of axum's plain-text
//! rejection, so malformed pagination gets the same `{"detail": ...}` body as
//! every other error.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use lib_core::AppError;
use serde::de::DeserializeOwned;

/// `Query<T>` with an [`AppError::InvalidInput`] (422) rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}
