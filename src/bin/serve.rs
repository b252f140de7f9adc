// Site Server Binary Entry Point
//
// Usage: cargo run --bin serve
// Configuration comes from HOST, PORT, CONTENT_PATH, ASSET_DIR, STRICT_CONTENT.

use portfolio_site::logging::{init_tracing, DEFAULT_FILTER};
use portfolio_site::{create_router, AppState, SiteConfig};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(DEFAULT_FILTER);

    tracing::info!("Starting portfolio server...");

    let config = SiteConfig::from_env()?;
    tracing::info!("Configuration:");
    match &config.content_path {
        Some(path) => tracing::info!("  CONTENT_PATH: {}", path.display()),
        None => tracing::info!("  CONTENT_PATH: (embedded)"),
    }
    tracing::info!("  ASSET_DIR: {}", config.asset_dir.display());
    tracing::info!("  STRICT_CONTENT: {}", config.strict_content);

    let state = AppState::new(&config)?;
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
