//! Web API
//!
//! ```text
//! /api/products ─► domain_products (in-memory | PostgreSQL)
//! /api/users    ─► domain_users (in-memory)
//! /health, /ready, /swagger-ui, /api-docs/openapi.json
//! ```

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use config::Config;
use state::AppState;

/// Full application router: documented `/api` routes plus health probes,
/// all behind the shared middleware stack.
pub fn build_app(state: &AppState) -> eyre::Result<Router> {
    let probes = health_router(state.config.app.clone()).merge(api::ready_router(state.clone()));
    let router =
        create_router::<openapi::ApiDoc>(api::routes(state), probes, &state.config.security)?;

    Ok(router)
}

/// State and router for the given configuration.
pub async fn initialize(config: Config) -> eyre::Result<(AppState, Router)> {
    let state = AppState::initialize(config).await?;
    let app = build_app(&state)?;
    Ok((state, app))
}
