//! Repository for the `movie` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies in insertion order, narrowed by any filter that is set.
    pub async fn list(pool: &PgPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie
             WHERE ($1::BIGINT IS NULL OR director_id = $1)
               AND ($2::BIGINT IS NULL OR genre_id = $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(filter.director_id)
            .bind(filter.genre_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only fields present in `input` are written;
    /// a present `None` sets the column to `NULL`.
    ///
    /// Returns `true` if a row with the given `id` exists. A missing row is
    /// not an error.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateMovie) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movie SET
                title       = CASE WHEN $2  THEN $3  ELSE title END,
                description = CASE WHEN $4  THEN $5  ELSE description END,
                trailer     = CASE WHEN $6  THEN $7  ELSE trailer END,
                year        = CASE WHEN $8  THEN $9  ELSE year END,
                rating      = CASE WHEN $10 THEN $11 ELSE rating END,
                genre_id    = CASE WHEN $12 THEN $13 ELSE genre_id END,
                director_id = CASE WHEN $14 THEN $15 ELSE director_id END
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.title.is_some())
        .bind(input.title.as_ref().and_then(|v| v.as_deref()))
        .bind(input.description.is_some())
        .bind(input.description.as_ref().and_then(|v| v.as_deref()))
        .bind(input.trailer.is_some())
        .bind(input.trailer.as_ref().and_then(|v| v.as_deref()))
        .bind(input.year.is_some())
        .bind(input.year.flatten())
        .bind(input.rating.is_some())
        .bind(input.rating.flatten())
        .bind(input.genre_id.is_some())
        .bind(input.genre_id.flatten())
        .bind(input.director_id.is_some())
        .bind(input.director_id.flatten())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
