//! `pokefun-api` -- web front end for the Poke lookup pipeline.
//!
//! Serves the two-pane lookup page and the JSON endpoints it calls.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default                     | Description                  |
//! |--------------------|----------|-----------------------------|------------------------------|
//! | `HOST`             | no       | `0.0.0.0`                   | Bind address                 |
//! | `PORT`             | no       | `7860`                      | Bind port                    |
//! | `CORS_ORIGINS`     | no       | `http://localhost:7860`     | Comma-separated origins      |
//! | `POKEAPI_BASE_URL` | no       | `https://pokeapi.co/api/v2` | PokeAPI root                 |

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokefun_api::config::ServerConfig;
use pokefun_api::router::build_app_router;
use pokefun_api::state::AppState;
use pokefun_pokeapi::api::PokeApi;
use pokefun_pokeapi::config::PokeApiConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pokefun_api=info,pokefun_pokeapi=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid server configuration");
        std::process::exit(1);
    });
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let pokeapi_config = PokeApiConfig::from_env();
    let pokeapi = PokeApi::new(&pokeapi_config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid PokeAPI configuration");
        std::process::exit(1);
    });
    tracing::info!(base_url = %pokeapi.base_url(), "PokeAPI client ready");

    // --- App state ---
    let state = AppState {
        pokeapi: Arc::new(pokeapi),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, starting graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
