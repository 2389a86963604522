//! Director entity model and DTO.

use catalog_core::error::CoreError;
use catalog_core::schema::{Field, FieldKind, Schema};
use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::TEXT_MAX_LEN;

/// Field schema for director payloads.
pub const DIRECTOR_SCHEMA: Schema = Schema {
    entity: "Director",
    fields: &[
        Field::read_only("id", FieldKind::Int64),
        Field::writable(
            "name",
            FieldKind::Text {
                max_len: TEXT_MAX_LEN,
            },
        ),
    ],
};

/// A row from the `director` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateDirector {
    pub name: Option<String>,
}

impl CreateDirector {
    /// Validate a raw JSON body against [`DIRECTOR_SCHEMA`].
    pub fn from_json(input: &serde_json::Value) -> Result<Self, CoreError> {
        DIRECTOR_SCHEMA.load_into(input)
    }
}
