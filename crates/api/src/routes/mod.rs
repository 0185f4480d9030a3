pub mod health;
pub mod lookup;
pub mod ui;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /lookup?q={name-or-id}     submit trigger
/// /lookup/random             random trigger
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(lookup::router())
}
