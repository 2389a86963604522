//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The entity's field [`Schema`](catalog_core::schema::Schema)
//! - `Deserialize` DTOs for inserts (and, for movies, partial updates)

pub mod director;
pub mod genre;
pub mod movie;

/// Length of every `VARCHAR` column in the catalog schema.
pub const TEXT_MAX_LEN: usize = 255;
