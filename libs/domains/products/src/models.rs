use chrono::{DateTime, Utc};
use core_common::BaseEntity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product as held by a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a stored product from a request body and the identity it should
    /// carry. Any id or timestamps in `dto` are ignored.
    pub fn from_dto(dto: ProductDto, base: BaseEntity) -> Self {
        Self {
            updated_at: base.last_modified(),
            id: base.id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock_quantity: dto.stock_quantity,
            category: dto.category,
            created_at: base.created_at,
        }
    }

    pub fn base(&self) -> BaseEntity {
        BaseEntity::existing(self.id.clone(), self.created_at, Some(self.updated_at))
    }
}

/// Product request and response body.
///
/// `id`, `createdAt` and `updatedAt` are server-assigned; values sent by the
/// client are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(read_only)]
    pub id: Option<String>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[schema(example = "Laptop", max_length = 255)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Serialized as a decimal string; numbers are accepted on input.
    #[schema(value_type = String, example = "999.99")]
    pub price: Decimal,

    #[schema(example = 50)]
    pub stock_quantity: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "Category must be at most 255 characters"))]
    #[schema(example = "Electronics", max_length = 255)]
    pub category: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "core_common::time::iso8601::option"
    )]
    #[schema(value_type = Option<String>, format = DateTime, read_only)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "core_common::time::iso8601::option"
    )]
    #[schema(value_type = Option<String>, format = DateTime, read_only)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
            category: product.category,
            created_at: Some(product.created_at),
            updated_at: Some(product.updated_at),
        }
    }
}
