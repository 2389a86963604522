//! Request extractors that reject with [`AppError`].
//!
//! Axum's built-in `Json`, `Path` and `Query` extractors reply with plain-text
//! rejections. These wrappers keep every failure in the `{ "error", "code" }`
//! JSON shape produced by [`AppError`].

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use catalog_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A syntactically valid JSON request body, not yet checked against any
/// entity schema.
///
/// ```ignore
/// async fn create(JsonBody(body): JsonBody) -> AppResult<StatusCode> {
///     let input = CreateMovie::from_json(&body)?;
///     // ...
/// }
/// ```
pub struct JsonBody(pub serde_json::Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// The integer `{id}` segment of an item path.
///
/// A segment that is not an integer does not name any item, so it is
/// answered with 404 rather than 400.
pub struct ItemId(pub DbId);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!(error = %rejection, path = %parts.uri.path(), "Item id is not an integer");
                AppError::NotFound(format!("No resource at {}", parts.uri.path()))
            })?;
        Ok(ItemId(id))
    }
}

/// Query-string parameters deserialized into `T`.
pub struct ListQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ListQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ListQuery(params))
    }
}
