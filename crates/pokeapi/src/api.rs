//! REST client for the PokeAPI endpoints.
//!
//! Wraps the three reads the lookup pipeline needs (pokemon, species,
//! sprite image) using [`reqwest`]. Each read comes in two shapes:
//!
//! - `try_fetch_*` returns `Result<_, PokeApiError>` for callers that want
//!   to know why a read failed.
//! - `fetch_*` logs the failure and returns `None`. Unknown keys, non-2xx
//!   statuses, malformed payloads and undecodable sprites all end up as
//!   `None`; nothing is raised to the UI layer.

use pokefun_core::error::CoreError;
use pokefun_core::key::EntityKey;
use pokefun_core::random::random_entity_id;
use pokefun_core::record::{EntityRecord, SpeciesRecord};
use pokefun_core::sprite::{render_sprite, RenderedImage};
use reqwest::Url;

use crate::config::PokeApiConfig;
use crate::messages::{PokemonResponse, SpeciesResponse};

/// Path segment of the core-attributes endpoint.
const POKEMON_PATH: &str = "pokemon";

/// Path segment of the species endpoint.
const SPECIES_PATH: &str = "pokemon-species";

/// HTTP client for one PokeAPI deployment.
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: Url,
}

/// Errors from the PokeAPI client layer.
#[derive(Debug, thiserror::Error)]
pub enum PokeApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// PokeAPI returned a non-2xx status code.
    #[error("PokeAPI error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The configured base URL cannot carry path segments.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The payload decoded but failed validation, or sprite bytes were
    /// not an image.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The blocking sprite render task panicked or was cancelled.
    #[error("Sprite render task failed: {0}")]
    RenderTask(#[from] tokio::task::JoinError),
}

impl PokeApiError {
    /// Whether upstream answered with a non-success status, i.e. the key
    /// is unknown rather than the call being broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }
}

impl PokeApi {
    /// Create a client for the configured API root.
    pub fn new(config: &PokeApiConfig) -> Result<Self, PokeApiError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        config: &PokeApiConfig,
    ) -> Result<Self, PokeApiError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| PokeApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        if base_url.cannot_be_a_base() {
            return Err(PokeApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ---- entity ----

    /// Fetch core attributes for raw user input.
    ///
    /// Empty input returns `None` without touching the network.
    pub async fn fetch_entity(&self, key: &str) -> Option<EntityRecord> {
        let key = EntityKey::parse(key)?;
        self.fetch_entity_by_key(&key).await
    }

    /// Fetch core attributes for a parsed key, logging and swallowing
    /// failures.
    pub async fn fetch_entity_by_key(&self, key: &EntityKey) -> Option<EntityRecord> {
        match self.try_fetch_entity(key).await {
            Ok(record) => Some(record),
            Err(e) => {
                log_fetch_failure(POKEMON_PATH, key, &e);
                None
            }
        }
    }

    /// Send `GET /pokemon/{key}` and convert the payload.
    pub async fn try_fetch_entity(&self, key: &EntityKey) -> Result<EntityRecord, PokeApiError> {
        let payload: PokemonResponse = self.get_json(POKEMON_PATH, key).await?;
        Ok(payload.into_record()?)
    }

    // ---- species ----

    /// Fetch species attributes for raw user input.
    ///
    /// Empty input returns `None` without touching the network.
    pub async fn fetch_species(&self, key: &str) -> Option<SpeciesRecord> {
        let key = EntityKey::parse(key)?;
        self.fetch_species_by_key(&key).await
    }

    /// Fetch species attributes for a parsed key, logging and swallowing
    /// failures.
    pub async fn fetch_species_by_key(&self, key: &EntityKey) -> Option<SpeciesRecord> {
        match self.try_fetch_species(key).await {
            Ok(record) => Some(record),
            Err(e) => {
                log_fetch_failure(SPECIES_PATH, key, &e);
                None
            }
        }
    }

    /// Send `GET /pokemon-species/{key}` and convert the payload.
    pub async fn try_fetch_species(&self, key: &EntityKey) -> Result<SpeciesRecord, PokeApiError> {
        let payload: SpeciesResponse = self.get_json(SPECIES_PATH, key).await?;
        Ok(payload.into_record())
    }

    // ---- sprite ----

    /// Download and render the entity's front sprite.
    ///
    /// Returns `None` when the entity has no sprite reference, the
    /// download fails, or the bytes do not decode as an image.
    pub async fn fetch_sprite(&self, entity: &EntityRecord) -> Option<RenderedImage> {
        let url = entity
            .sprite_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty());

        let Some(url) = url else {
            tracing::info!(entity = %entity.name, "Entity has no sprite reference");
            return None;
        };

        match self.try_fetch_sprite(url).await {
            Ok(image) => Some(image),
            Err(PokeApiError::Core(e)) => {
                tracing::warn!(entity = %entity.name, url, error = %e, "Sprite failed to decode");
                None
            }
            Err(e @ PokeApiError::RenderTask(_)) => {
                tracing::warn!(entity = %entity.name, url, error = %e, "Sprite render aborted");
                None
            }
            Err(e) => {
                tracing::warn!(entity = %entity.name, url, error = %e, "Sprite download failed");
                None
            }
        }
    }

    /// Download sprite bytes from `url` and render them.
    ///
    /// Decoding and resizing run on the blocking thread pool.
    pub async fn try_fetch_sprite(&self, url: &str) -> Result<RenderedImage, PokeApiError> {
        tracing::debug!(url, "Fetching sprite");

        let response = self.client.get(url).send().await?;
        let bytes = Self::ensure_success(response).await?.bytes().await?;

        let image = tokio::task::spawn_blocking(move || render_sprite(&bytes)).await??;
        Ok(image)
    }

    // ---- random ----

    /// Draw a random national dex number and resolve it to a display name.
    ///
    /// Returns `None` if the drawn id does not resolve.
    pub async fn pick_random(&self) -> Option<String> {
        let key = EntityKey::Id(random_entity_id());
        tracing::debug!(%key, "Picked random entity id");

        self.fetch_entity_by_key(&key).await.map(|record| record.name)
    }

    // ---- private helpers ----

    /// Build `{base_url}/{resource}/{key}` with proper segment escaping.
    fn endpoint(&self, resource: &str, key: &EntityKey) -> Result<Url, PokeApiError> {
        let mut url = self.base_url.clone();
        let segment = key.to_string();

        url.path_segments_mut()
            .map_err(|()| PokeApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .extend([resource, segment.as_str()]);

        Ok(url)
    }

    /// Send a GET for `{resource}/{key}` and parse the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        key: &EntityKey,
    ) -> Result<T, PokeApiError> {
        let url = self.endpoint(resource, key)?;
        tracing::debug!(%url, "Sending PokeAPI request");

        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`PokeApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PokeApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PokeApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PokeApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Log a failed entity/species read at a level matching its cause.
fn log_fetch_failure(resource: &'static str, key: &EntityKey, error: &PokeApiError) {
    if error.is_not_found() {
        tracing::info!(resource, %key, error = %error, "Not found upstream");
    } else {
        tracing::warn!(resource, %key, error = %error, "Fetch failed, treating as not found");
    }
}
