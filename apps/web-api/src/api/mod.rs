//! API routes module

pub mod health;
pub mod products;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Routes mounted under `/api` by `create_router`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/users", users::router(state))
}

/// `/ready` with the backend probes applied.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
