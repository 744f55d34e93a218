use anyhow::Result;
use axum::Router;
use clap::Parser;
use samplestat_storage::{schema, sqlite};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use crate::config::{Args, Config, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    config.apply_args(&args);

    init_tracing(config.log_format);

    tracing::info!("Starting SampleStat server");
    tracing::debug!(?config, "Configuration loaded");

    // Initialize database pool
    let pool = sqlite::create_pool_with_config(&config.sqlite()).await?;
    if args.reset {
        schema::initialize(&pool).await?;
    } else {
        schema::ensure(&pool).await?;
    }
    tracing::info!("Database ready: {}", sqlite::pool_status(&pool));

    let app = Router::new()
        .merge(samplestat_api::routes(samplestat_api::AppState::from_pool(pool.clone())))
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "samplestat=debug,samplestat_api=debug,samplestat_storage=debug,tower_http=debug".into()
    });

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
