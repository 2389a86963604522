/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is a handle to shared connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened at startup and closed on shutdown.
    pub pool: catalog_db::DbPool,
}
