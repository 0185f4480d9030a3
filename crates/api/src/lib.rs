//! Pokefun web server library.
//!
//! Exposes the building blocks (config, state, routes, handlers) so
//! integration tests and the binary entrypoint share one router.

pub mod config;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
