//! Domain primitives shared by the catalog crates.
//!
//! Holds the error taxonomy, primary-key types, and the field schemas used to
//! validate and coerce inbound JSON before it reaches the database layer.

pub mod error;
pub mod schema;
pub mod types;
