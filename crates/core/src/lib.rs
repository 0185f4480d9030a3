//! `pokefun-core` -- domain types and pure helpers for the lookup pipeline.
//!
//! Nothing in this crate touches the network. The HTTP client lives in
//! `pokefun-pokeapi`, which builds the records defined here and hands
//! them to the [`info`] formatter and the [`sprite`] renderer.

pub mod error;
pub mod info;
pub mod key;
pub mod naming;
pub mod random;
pub mod record;
pub mod sprite;
