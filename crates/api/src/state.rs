use std::sync::Arc;

use pokefun_pokeapi::api::PokeApi;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// PokeAPI client used by every lookup.
    pub pokeapi: Arc<PokeApi>,
}
