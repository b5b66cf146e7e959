//! Niaga API Server
//!
//! Main entry point for the Niaga dashboard backend service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use niaga_api::{create_router, AppState};
use niaga_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "niaga=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        default_locale = %config.display.default_locale,
        max_upload_bytes = config.upload.max_upload_bytes,
        "Configuration loaded"
    );

    // Create application state and router
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config);
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
