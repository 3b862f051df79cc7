//! Application state management

use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_products::{InMemoryProductRepository, PgProductRepository, ProductService};
use migration::Migrator;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::Config;

/// Where products are kept for the lifetime of the process.
#[derive(Clone)]
pub enum ProductBackend {
    InMemory(InMemoryProductRepository),
    Postgres(DatabaseConnection),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductBackend,
}

impl AppState {
    /// Connect the configured product backend, apply migrations and seed the
    /// sample catalog when it is empty.
    pub async fn initialize(config: Config) -> eyre::Result<Self> {
        let products = match config.database.clone() {
            Some(database) => {
                info!("Connecting to PostgreSQL");
                let db = connect_from_config_with_retry(database, None)
                    .await
                    .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
                run_migrations::<Migrator>(&db, config.app.name).await?;

                ProductService::new(PgProductRepository::new(db.clone()))
                    .seed_if_empty()
                    .await?;
                ProductBackend::Postgres(db)
            }
            None => {
                info!("DATABASE_URL not set, keeping products in memory");
                let repository = InMemoryProductRepository::new();

                ProductService::new(repository.clone())
                    .seed_if_empty()
                    .await?;
                ProductBackend::InMemory(repository)
            }
        };

        Ok(Self { config, products })
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        match &self.products {
            ProductBackend::Postgres(db) => Some(db),
            ProductBackend::InMemory(_) => None,
        }
    }

    /// Close the database pool, if any.
    pub async fn close(self) {
        let ProductBackend::Postgres(db) = self.products else {
            return;
        };

        match db.close().await {
            Ok(()) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    }
}
