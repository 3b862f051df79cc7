use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Product persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, oldest first.
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Products whose category equals `category` exactly.
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Overwrite the stored product with the same id. `None` when absent.
    async fn update(&self, product: Product) -> ProductResult<Option<Product>>;

    /// `false` when nothing was removed.
    async fn delete(&self, id: &str) -> ProductResult<bool>;

    async fn count(&self) -> ProductResult<u64>;
}

/// In-memory implementation used when no database is configured.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.products.write().await.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(slot) = products.iter_mut().find(|p| p.id == product.id) else {
            return Ok(None);
        };
        *slot = product.clone();

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(Some(product))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);

        let deleted = products.len() < before;
        if deleted {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(deleted)
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}
