use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;
use web_api::config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let (state, app) = web_api::initialize(config).await?;
    let server = state.config.server.clone();

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        server.address()
    );

    create_production_app(app, &server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        state.close().await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Web API shutdown complete");
    Ok(())
}
