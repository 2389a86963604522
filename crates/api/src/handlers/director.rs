//! Handlers for the `/directors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::models::director::{CreateDirector, Director};
use catalog_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ItemId, JsonBody};
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// POST /directors/{id}
///
/// Directors are created through the item path. The `{id}` segment must be
/// an integer but is otherwise ignored; the new row gets a fresh id.
pub async fn create(
    State(state): State<AppState>,
    ItemId(_): ItemId,
    JsonBody(body): JsonBody,
) -> AppResult<StatusCode> {
    let input = CreateDirector::from_json(&body)?;
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok(StatusCode::CREATED)
}
