//! Custom Axum extractors
//!
//! Decoding failures become [`ApiError::Malformed`] so every 4xx has the
//! same `{"error": ...}` shape.

use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::malformed(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Entity id from the single `{id}` path segment
pub struct PathId<I>(pub I);

impl<S, I> FromRequestParts<S> for PathId<I>
where
    S: Send + Sync,
    I: FromStr + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::malformed("id is required"))?;

        let id = raw
            .parse::<I>()
            .map_err(|_| ApiError::malformed("id must be a positive integer"))?;
        Ok(Self(id))
    }
}
