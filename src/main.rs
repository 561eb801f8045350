//! Delivery Fee Engine HTTP server.
//!
//! Settings come from the environment (see [`ServerSettings`]). When
//! `FEE_CONFIG_PATH` is unset the built-in tariff is used.

use delivery_fee_engine::api::{AppState, create_router};
use delivery_fee_engine::config::{ConfigLoader, ServerSettings};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = ServerSettings::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match &settings.fee_config_path {
        Some(path) => {
            let loader = ConfigLoader::load(path)?;
            info!(path = %path.display(), "Loaded fee configuration");
            loader
        }
        None => {
            info!("FEE_CONFIG_PATH not set, using the built-in tariff");
            ConfigLoader::default()
        }
    };

    let router = create_router(AppState::new(loader));

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(address = %listener.local_addr()?, "Delivery fee engine listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Completes on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
