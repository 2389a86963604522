//! Handlers for the read-only `/genres` resource.

use axum::extract::State;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::models::genre::Genre;
use catalog_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ItemId;
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /genres/{id}
pub async fn get_by_id(State(state): State<AppState>, ItemId(id): ItemId) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}
