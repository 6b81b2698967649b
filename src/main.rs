//! User Service - A small user CRUD HTTP service
//!
//! CRUD over users behind an interchangeable storage layer: an in-memory
//! map or a remote Redis cache, selected from the environment.

mod api;
mod config;
mod error;
mod models;
mod services;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::{Config, StorageKind};
use models::User;
use services::UserService;
use storage::{MemoryStorage, RedisStorage, Storage};

/// Main entry point for the user service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Construct the selected storage backend (Redis connects and pings)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
///
/// A missing/invalid storage selector or an unreachable Redis server
/// stops the process before it serves any traffic.
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting User Service");

    // Load configuration from environment variables
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };
    info!(
        "Configuration loaded: storage={:?}, port={}",
        config.storage, config.server_port
    );

    // Construct the selected storage backend
    let storage: Arc<dyn Storage<User>> = match config.storage {
        StorageKind::Memory => Arc::new(MemoryStorage::<User>::new()),
        StorageKind::Redis => match RedisStorage::connect(&config.redis_url()).await {
            Ok(storage) => Arc::new(storage),
            Err(err) => {
                error!(error = %err, "could not construct redis backend");
                std::process::exit(1);
            }
        },
    };

    // Create application state with the user service
    let state = AppState::new(UserService::new(storage));

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, "could not bind {addr}");
            std::process::exit(1);
        }
    };
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "server error");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
