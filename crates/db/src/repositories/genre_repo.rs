//! Repository for the `genre` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Read operations for genres. Rows are seeded outside the service.
pub struct GenreRepo;

impl GenreRepo {
    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }
}
