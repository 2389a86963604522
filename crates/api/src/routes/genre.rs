//! Route definitions for the `/genres` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Routes for genres.
///
/// ```text
/// GET /genres/      -> list
/// GET /genres/{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres/", get(genre::list))
        .route("/genres", get(genre::list))
        .route("/genres/{id}", get(genre::get_by_id))
}
