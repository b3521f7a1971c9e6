//! Custom Axum extractors
//!
//! Rejections are turned into `ApiError` so every 400 carries the same
//! JSON error payload.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::{ItemId, ValidationError};
use super::error::ApiError;

/// Extract and validate an item id from path
pub struct ValidItemId(pub ItemId);

impl<S> FromRequestParts<S> for ValidItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self(ItemId::parse(&id)?))
    }
}

/// JSON body whose decode failures are reported as `ApiError::MalformedBody`
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
