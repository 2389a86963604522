//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Routes for directors.
///
/// ```text
/// GET  /directors/      -> list
/// GET  /directors/{id}  -> get_by_id
/// POST /directors/{id}  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/directors/", get(director::list))
        .route("/directors", get(director::list))
        .route(
            "/directors/{id}",
            get(director::get_by_id).post(director::create),
        )
}
