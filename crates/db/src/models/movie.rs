//! Movie entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::schema::{present, Field, FieldKind, Schema};
use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::TEXT_MAX_LEN;

const TEXT: FieldKind = FieldKind::Text {
    max_len: TEXT_MAX_LEN,
};

/// Field schema for movie payloads.
pub const MOVIE_SCHEMA: Schema = Schema {
    entity: "Movie",
    fields: &[
        Field::read_only("id", FieldKind::Int64),
        Field::writable("title", TEXT),
        Field::writable("description", TEXT),
        Field::writable("trailer", TEXT),
        Field::writable("year", FieldKind::Int32),
        Field::writable("rating", FieldKind::Float),
        Field::writable("genre_id", FieldKind::Int64),
        Field::writable("director_id", FieldKind::Int64),
    ],
};

/// A row from the `movie` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for creating a new movie. Absent fields are stored as `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

impl CreateMovie {
    /// Validate a raw JSON body against [`MOVIE_SCHEMA`].
    pub fn from_json(input: &serde_json::Value) -> Result<Self, CoreError> {
        MOVIE_SCHEMA.load_into(input)
    }
}

/// DTO for partially updating a movie.
///
/// The outer `Option` records whether the field was sent at all; the inner one
/// carries the new value, where `None` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateMovie {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub genre_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "present")]
    pub director_id: Option<Option<DbId>>,
}

impl UpdateMovie {
    /// Validate a raw JSON body against [`MOVIE_SCHEMA`], keeping only the
    /// fields that were sent.
    pub fn from_json(input: &serde_json::Value) -> Result<Self, CoreError> {
        MOVIE_SCHEMA.load_into(input)
    }

    /// `true` when the body named no writable field.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Equality filters for listing movies. `None` applies no predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}
