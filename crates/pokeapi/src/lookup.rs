//! The single entry point the UI layer calls.
//!
//! [`lookup`] runs the whole pipeline for one key: entity, species, info
//! text, then the sprite when an entity was found. Calls are awaited in
//! that order, one at a time, and nothing survives between invocations.

use pokefun_core::info::format_info;
use pokefun_core::sprite::RenderedImage;

use crate::api::PokeApi;

/// What the UI renders for one lookup.
#[derive(Debug, Clone)]
pub struct LookupResult {
    /// Info pane text, or the not-found message.
    pub info: String,
    /// Sprite pane image. Always `None` when no entity was found.
    pub image: Option<RenderedImage>,
}

/// Resolve `key` into info text and an optional sprite.
///
/// Never fails: empty input, unknown names or ids and upstream errors all
/// produce the not-found message with no image.
#[tracing::instrument(skip(api))]
pub async fn lookup(api: &PokeApi, key: &str) -> LookupResult {
    let entity = api.fetch_entity(key).await;
    let species = api.fetch_species(key).await;

    if entity.is_some() && species.is_none() {
        tracing::warn!("Species data unavailable, omitting generation");
    }

    let info = format_info(entity.as_ref(), species.as_ref());

    let image = match &entity {
        Some(record) => api.fetch_sprite(record).await,
        None => None,
    };

    LookupResult { info, image }
}

/// Pick a random entity and look it up.
///
/// A failed draw falls through to an empty-key lookup and so renders the
/// not-found message.
pub async fn lookup_random(api: &PokeApi) -> LookupResult {
    let name = api.pick_random().await;
    lookup(api, name.as_deref().unwrap_or_default()).await
}
