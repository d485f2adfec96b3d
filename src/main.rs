use anyhow::Context;
use tracing_subscriber::EnvFilter;

use plotline_api::{
    api::{create_router, AppState},
    config::Config,
    services::Engine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plotline_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Vectorizing the catalog is CPU-bound; keep it off the async workers
    let catalog_path = config.catalog_path.clone();
    let engine = tokio::task::spawn_blocking(move || Engine::initialize(&catalog_path))
        .await
        .context("engine initialization panicked")?
        .with_context(|| format!("failed to initialize engine from {}", config.catalog_path))?;

    let state = AppState::new(engine);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
