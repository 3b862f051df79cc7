use core_common::BaseEntity;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDto};
use crate::repository::ProductRepository;

/// Product use cases on top of a [`ProductRepository`].
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_products(&self) -> ProductResult<Vec<ProductDto>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn list_by_category(&self, category: &str) -> ProductResult<Vec<ProductDto>> {
        let products = self.repository.find_by_category(category).await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn get_product(&self, id: &str) -> ProductResult<ProductDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Store a new product under a fresh id.
    pub async fn create_product(&self, input: ProductDto) -> ProductResult<ProductDto> {
        let product = Product::from_dto(input, BaseEntity::new());
        let stored = self.repository.insert(product).await?;
        Ok(stored.into())
    }

    /// Overwrite every client-controlled field, keeping id and creation time.
    pub async fn update_product(&self, id: &str, input: ProductDto) -> ProductResult<ProductDto> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let product = Product::from_dto(input, existing.base().touched());
        self.repository
            .update(product)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Insert the sample catalog when the repository is empty.
    ///
    /// Returns the number of products inserted.
    pub async fn seed_if_empty(&self) -> ProductResult<usize> {
        if self.repository.count().await? > 0 {
            tracing::debug!("Product catalog already populated, skipping seed");
            return Ok(0);
        }

        let samples = sample_products();
        let inserted = samples.len();
        for dto in samples {
            self.repository
                .insert(Product::from_dto(dto, BaseEntity::new()))
                .await?;
        }

        tracing::info!(count = inserted, "Seeded sample products");
        Ok(inserted)
    }
}

fn sample_products() -> Vec<ProductDto> {
    let sample = |name: &str, description: &str, price: Decimal, stock_quantity: i32| ProductDto {
        id: None,
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        stock_quantity,
        category: Some("Electronics".to_string()),
        created_at: None,
        updated_at: None,
    };

    vec![
        sample("Laptop", "High-performance laptop", Decimal::new(99999, 2), 50),
        sample("Smartphone", "Latest model smartphone", Decimal::new(59999, 2), 100),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use chrono::{Duration, Utc};
    use mockall::predicate::eq;

    fn input(name: &str) -> ProductDto {
        ProductDto {
            id: Some("client-id".to_string()),
            name: name.to_string(),
            description: Some("desc".to_string()),
            price: Decimal::new(999, 2),
            stock_quantity: 3,
            category: Some("Tools".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_identity() {
        let service = ProductService::new(InMemoryProductRepository::new());

        let first = service.create_product(input("Widget")).await.unwrap();
        let second = service.create_product(input("Widget")).await.unwrap();

        let first_id = first.id.unwrap();
        assert!(!first_id.is_empty());
        assert_ne!(first_id, "client-id");
        assert_ne!(Some(first_id), second.id);
        assert!(first.created_at.is_some());
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created_at() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let created = service.create_product(input("Widget")).await.unwrap();
        let id = created.id.clone().unwrap();

        let mut change = input("Gadget");
        change.created_at = Some(Utc::now() - Duration::days(365));
        let updated = service.update_product(&id, change).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Gadget");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let err = service.update_product("missing", input("X")).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let created = service.create_product(input("Widget")).await.unwrap();
        let id = created.id.unwrap();

        service.delete_product(&id).await.unwrap();
        assert!(matches!(
            service.get_product(&id).await,
            Err(ProductError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_product(&id).await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let service = ProductService::new(InMemoryProductRepository::new());

        assert_eq!(service.seed_if_empty().await.unwrap(), 2);
        assert_eq!(service.seed_if_empty().await.unwrap(), 0);

        let electronics = service.list_by_category("Electronics").await.unwrap();
        let names: Vec<_> = electronics.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Smartphone"]);
        assert_eq!(electronics[0].price, Decimal::new(99999, 2));
        assert_eq!(electronics[1].stock_quantity, 100);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_repository_has_rows() {
        let mut mock = MockProductRepository::new();
        mock.expect_count().times(1).returning(|| Ok(7));
        mock.expect_insert().never();

        let service = ProductService::new(mock);
        assert_eq!(service.seed_if_empty().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_queries_repository_by_id() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_by_id()
            .with(eq("abc"))
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(mock);
        assert!(matches!(
            service.get_product("abc").await,
            Err(ProductError::NotFound(_))
        ));
    }
}
