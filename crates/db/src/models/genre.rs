//! Genre entity model.
//!
//! Genres are read-only over HTTP; rows are seeded directly in the database.

use catalog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genre` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: Option<String>,
}
