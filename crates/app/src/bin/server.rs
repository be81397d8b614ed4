// Record Shop API - HTTP server

use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use recordshop_app::cli::Cli;
use recordshop_app::telemetry::init_tracing;
use recordshop_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    info!("Starting Record Shop API server");

    let config = Config::from_env_file(&cli.env_path).map_err(|e| {
        error!("Failed to load configuration: {:#}", e);
        e
    })?;

    info!(
        env_path = %cli.env_path.display(),
        "Configuration loaded successfully"
    );

    let pool = recordshop_db::connect(&config.database).await.map_err(|e| {
        error!("Failed to connect to database: {:#}", e);
        e
    })?;

    recordshop_db::migrate(&pool).await.map_err(|e| {
        error!("Failed to migrate database: {:#}", e);
        e
    })?;

    let app = recordshop_app::create_app(&config, pool);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
