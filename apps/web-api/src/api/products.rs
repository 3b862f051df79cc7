//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::{AppState, ProductBackend};

pub fn router(state: &AppState) -> Router {
    match &state.products {
        ProductBackend::InMemory(repository) => {
            handlers::router(ProductService::new(repository.clone()))
        }
        ProductBackend::Postgres(db) => {
            handlers::router(ProductService::new(PgProductRepository::new(db.clone())))
        }
    }
}
