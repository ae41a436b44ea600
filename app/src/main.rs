//! Wedding RSVP HTTP server.

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wedding_rsvp::{
    config::Config,
    metrics,
    server::{AppState, build_router},
};
use wedding_rsvp_core::environment::SystemClock;
use wedding_rsvp_postgres::PostgresRsvpRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env for local development
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wedding_rsvp=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    info!("Starting Wedding RSVP server");

    let config = Config::from_env();
    info!(
        couple = %config.wedding.couple,
        starts_at = %config.wedding.starts_at,
        "Configuration loaded"
    );

    if config.server.metrics_enabled {
        if let Err(e) = metrics::install_exporter(&config.server.metrics_addr()) {
            warn!(error = %e, "Metrics exporter disabled");
        }
    }

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout))
        .idle_timeout(Duration::from_secs(config.database.idle_timeout))
        .connect(&config.database.url)
        .await?;
    info!("Database connected");

    let state = AppState::new(
        Arc::new(PostgresRsvpRepository::from_pool(pool.clone())),
        Arc::new(SystemClock),
        config.wedding,
    );
    let app = build_router(state);

    let addr = config.server.http_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
