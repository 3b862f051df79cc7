//! Users API routes

use axum::Router;
use domain_users::{InMemoryUserStore, UserService, handlers};

use crate::state::AppState;

/// Every call starts from a freshly seeded store.
pub fn router(_state: &AppState) -> Router {
    handlers::router(UserService::new(InMemoryUserStore::seeded()))
}
