use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// The two-pane lookup page.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / -- serve the lookup page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
