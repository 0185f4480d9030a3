//! Local stand-in for PokeAPI used by the integration tests.
//!
//! Serves canned pokemon/species documents and sprites generated at
//! startup. Known keys:
//!
//! | Key                    | Behaviour                                       |
//! |------------------------|-------------------------------------------------|
//! | `umbreon` / `197`      | full record, 96x96 sprite, generation-ii        |
//! | `porygon-wide`         | sprite is a 300x40 PNG, no hidden ability       |
//! | `wailord-huge`         | sprite is a 1200x1200 PNG                       |
//! | `broken-sprite`        | sprite URL serves bytes that are not an image   |
//! | `missing-sprite`       | sprite URL returns 404                          |
//! | `no-sprite`            | `front_default` is null                         |
//! | `no-stats`             | record with an empty stats list                 |
//! | `not-json`             | 200 with a non-JSON body                        |
//! | `lonely`               | record exists, species returns 404              |
//! | `1`..=`1025`, `poke-N` | generic record named `poke-N`                   |
//!
//! Anything else is a 404.

#![allow(dead_code)]

use std::io::Cursor;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use pokefun_pokeapi::api::PokeApi;
use pokefun_pokeapi::config::PokeApiConfig;

/// Width/height of the canned umbreon sprite.
pub const UMBREON_SPRITE_SIZE: u32 = 96;

/// A running fixture server. Aborted on drop.
pub struct FixtureServer {
    /// Origin, e.g. `http://127.0.0.1:49152`.
    pub origin: String,
    /// API root to hand to [`PokeApiConfig`].
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl FixtureServer {
    pub fn client(&self) -> PokeApi {
        let config = PokeApiConfig {
            base_url: self.base_url.clone(),
        };
        PokeApi::new(&config).expect("fixture base URL is valid")
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Bind on an ephemeral port and serve the fixtures in the background.
pub async fn spawn_fixture_server() -> FixtureServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture listener address");
    let origin = format!("http://{addr}");

    let app = Router::new()
        .route("/api/v2/pokemon/{key}", get(pokemon))
        .route("/api/v2/pokemon-species/{key}", get(species))
        .route("/sprites/{file}", get(sprite))
        .with_state(origin.clone());

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });

    FixtureServer {
        base_url: format!("{origin}/api/v2"),
        origin,
        handle,
    }
}

/// Encode a solid-colour PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 40, 60, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode fixture png");
    buf.into_inner()
}

/// Resolve a generic `poke-N` or numeric key to its id.
fn generic_id(key: &str) -> Option<u32> {
    let id: u32 = key.strip_prefix("poke-").unwrap_or(key).parse().ok()?;
    (1..=1025).contains(&id).then_some(id)
}

fn umbreon(origin: &str) -> Value {
    json!({
        "id": 197,
        "name": "umbreon",
        "height": 10,
        "weight": 270,
        "types": [{"slot": 1, "type": {"name": "dark", "url": ""}}],
        "abilities": [
            {"ability": {"name": "synchronize", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "inner-focus", "url": ""}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 95, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 65, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 110, "effort": 0, "stat": {"name": "defense", "url": ""}},
            {"base_stat": 60, "effort": 0, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 130, "effort": 2, "stat": {"name": "special-defense", "url": ""}},
            {"base_stat": 65, "effort": 0, "stat": {"name": "speed", "url": ""}}
        ],
        "sprites": {"front_default": format!("{origin}/sprites/umbreon.png")}
    })
}

fn simple(id: u32, name: &str, sprite: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 130,
        "types": [{"slot": 1, "type": {"name": "normal", "url": ""}}],
        "abilities": [{"ability": {"name": "run-away", "url": ""}, "is_hidden": false, "slot": 1}],
        "stats": [
            {"base_stat": 50, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 50, "stat": {"name": "speed", "url": ""}}
        ],
        "sprites": {"front_default": sprite}
    })
}

async fn pokemon(State(origin): State<String>, Path(key): Path<String>) -> Response {
    let body = match key.as_str() {
        "umbreon" | "197" => umbreon(&origin),
        "porygon-wide" => simple(137, "porygon-wide", json!(format!("{origin}/sprites/wide.png"))),
        "wailord-huge" => simple(321, "wailord-huge", json!(format!("{origin}/sprites/huge.png"))),
        "broken-sprite" => simple(900, "broken-sprite", json!(format!("{origin}/sprites/broken.png"))),
        "missing-sprite" => simple(901, "missing-sprite", json!(format!("{origin}/sprites/gone.png"))),
        "no-sprite" => simple(902, "no-sprite", Value::Null),
        "lonely" => simple(903, "lonely", json!(format!("{origin}/sprites/umbreon.png"))),
        "no-stats" => json!({"id": 904, "name": "no-stats", "height": 1, "weight": 1, "stats": []}),
        "not-json" => return (StatusCode::OK, "<html>teapot</html>").into_response(),
        other => match generic_id(other) {
            Some(id) => simple(id, &format!("poke-{id}"), json!(format!("{origin}/sprites/umbreon.png"))),
            None => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
        },
    };
    Json(body).into_response()
}

async fn species(Path(key): Path<String>) -> Response {
    let generation = match key.as_str() {
        "umbreon" | "197" => "generation-ii",
        "porygon-wide" | "wailord-huge" | "broken-sprite" | "missing-sprite" | "no-sprite" => "generation-i",
        other if generic_id(other).is_some() => "generation-i",
        _ => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };
    Json(json!({
        "id": 1,
        "name": key,
        "generation": {"name": generation, "url": "https://pokeapi.co/api/v2/generation/1/"}
    }))
    .into_response()
}

async fn sprite(Path(file): Path<String>) -> Response {
    let bytes = match file.as_str() {
        "umbreon.png" => png_bytes(UMBREON_SPRITE_SIZE, UMBREON_SPRITE_SIZE),
        "wide.png" => png_bytes(300, 40),
        "huge.png" => png_bytes(1200, 1200),
        "broken.png" => b"definitely not an image".to_vec(),
        _ => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };
    ([(header::CONTENT_TYPE, "image/png")], bytes).into_response()
}
