//! PokeAPI client library.
//!
//! Provides typed wire messages, the fetchers for entity, species and
//! sprite data, the random selector, and the [`lookup`] adapter that the
//! UI layer calls to turn a name or id into info text plus a sprite.

pub mod api;
pub mod config;
pub mod lookup;
pub mod messages;
