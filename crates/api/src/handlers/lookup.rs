//! Handlers for the submit and random triggers.
//!
//! Both always answer `200` with the info text; lookup failures surface
//! as the not-found message and a `null` image, never as an error status.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pokefun_core::sprite::RenderedImage;
use pokefun_pokeapi::lookup::{self, LookupResult};
use serde::{Deserialize, Serialize};

use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/lookup`.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    /// Name or numeric id. Missing is treated as empty.
    #[serde(default)]
    pub q: String,
}

/// Payload rendered by the two-pane page.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    /// Info pane text.
    pub info: String,
    /// Sprite as a `data:image/png;base64,...` URI, or `null`.
    pub image: Option<String>,
}

impl From<LookupResult> for LookupResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            image: result.image.as_ref().and_then(png_data_uri),
            info: result.info,
        }
    }
}

/// GET /api/v1/lookup?q={name-or-id}
///
/// A query string that does not deserialize is looked up as empty input.
pub async fn lookup_by_key(
    State(state): State<AppState>,
    query: Result<Query<LookupParams>, QueryRejection>,
) -> Json<DataResponse<LookupResponse>> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::debug!(error = %e, "Unparseable lookup query, treating as empty");
            LookupParams::default()
        }
    };
    let result = lookup::lookup(&state.pokeapi, &params.q).await;
    Json(DataResponse {
        data: result.into(),
    })
}

/// GET /api/v1/lookup/random
pub async fn lookup_random(State(state): State<AppState>) -> Json<DataResponse<LookupResponse>> {
    let result = lookup::lookup_random(&state.pokeapi).await;
    Json(DataResponse {
        data: result.into(),
    })
}

/// Encode a rendered sprite as an inline PNG data URI.
///
/// Encoding failures are logged and drop the image; the info text is
/// still returned.
fn png_data_uri(image: &RenderedImage) -> Option<String> {
    match image.to_png() {
        Ok(png) => Some(format!("data:image/png;base64,{}", STANDARD.encode(png))),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode sprite as PNG");
            None
        }
    }
}
