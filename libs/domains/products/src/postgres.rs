use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{entity, error::ProductResult, models::Product, repository::ProductRepository};

/// PostgreSQL implementation of [`ProductRepository`].
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn ordered() -> sea_orm::Select<entity::Entity> {
        entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = Self::ordered().all(&self.db).await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let models = Self::ordered()
            .filter(entity::Column::Category.eq(category))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(Product::from))
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let model = entity::ActiveModel::from(product).insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        match entity::ActiveModel::from(product).update(&self.db).await {
            Ok(model) => {
                tracing::info!(product_id = %model.id, "Updated product");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(deleted)
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}
