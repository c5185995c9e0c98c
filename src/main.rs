use incident_desk::{
    api::{build_router, AppState},
    config::Config,
    state::IncidentStore,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "incident_desk=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        eprintln!("Using default configuration");
        Config::default()
    });

    tracing::info!("Starting Incident Desk v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory store; state resets on every restart
    let store = Arc::new(IncidentStore::with_seed_data());
    tracing::info!(incidents = store.len(), "In-memory store seeded");

    let app = build_router(AppState::new(store), &config.static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HTTP API listening on http://{}", addr);
    tracing::info!("   REST API: http://{}/api/incidents", addr);
    tracing::info!("   Browser UI: http://{}/", addr);

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = server => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}
