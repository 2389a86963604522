//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use catalog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ItemId, JsonBody, ListQuery};
use crate::query::MovieListParams;
use crate::state::AppState;

/// GET /movies/?director_id=&genre_id=
///
/// A filter value that is not an integer matches no movie.
pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let Some(filter) = params.to_filter() else {
        tracing::debug!(?params, "Movie filter is not an integer");
        return Ok(Json(Vec::new()));
    };
    let movies = MovieRepo::list(&state.pool, &filter).await?;
    Ok(Json(movies))
}

/// POST /movies/
///
/// Replies with a bare `Ok`; the new id is not returned.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, &'static str)> {
    let input = CreateMovie::from_json(&body)?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, "Movie created");
    Ok((StatusCode::CREATED, "Ok"))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Partial update. Answers 204 whether or not the movie exists.
pub async fn update(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    JsonBody(body): JsonBody,
) -> AppResult<StatusCode> {
    let input = UpdateMovie::from_json(&body)?;
    if input.is_empty() {
        tracing::debug!(movie_id = id, "Update names no writable field");
    }
    let matched = MovieRepo::update(&state.pool, id, &input).await?;
    tracing::info!(movie_id = id, matched, "Movie updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
///
/// Answers 204 whether or not the movie exists.
pub async fn delete(State(state): State<AppState>, ItemId(id): ItemId) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    tracing::info!(movie_id = id, deleted, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
