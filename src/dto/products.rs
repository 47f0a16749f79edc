use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::product::Product;
use crate::dto::utc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            category_id: value.category_id.into_inner(),
            description: value.description.into_inner(),
            is_deleted: value.status.is_deleted(),
            created_at: utc(value.created_at),
            updated_at: utc(value.updated_at),
        }
    }
}
