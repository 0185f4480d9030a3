use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount lookup routes (under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lookup", get(handlers::lookup::lookup_by_key))
        .route("/lookup/random", get(handlers::lookup::lookup_random))
}
