//! Entry point for the notehub-server binary.

use notehub_server::{AppState, ServerConfig, app};
use notehub_store::open_repository;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; a .env file fills in unset variables
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!("Starting notehub-server");
    tracing::info!(
        "Configuration: port={}, log_level={}, static_dir={}",
        config.port,
        config.log_level,
        config.static_dir.display()
    );

    // Open the document store; connecting continues in the background
    let notes = open_repository(&config.store).await?;

    // Build application state and router
    let addr = config.socket_addr();
    let state = AppState::new(notes.clone(), config);
    let router = app(state);

    // Create listener
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    notes.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
