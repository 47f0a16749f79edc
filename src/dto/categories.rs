use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::category::Category;
use crate::dto::products::ProductDto;
use crate::dto::utc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            description: value.description.into_inner(),
            is_deleted: value.status.is_deleted(),
            created_at: utc(value.created_at),
            updated_at: utc(value.updated_at),
        }
    }
}

/// A category together with its active products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetailsDto {
    pub name: String,
    pub description: String,
    pub products: Vec<ProductDto>,
}
