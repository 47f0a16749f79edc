use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, EntityStatus, ProductDescription, ProductId, ProductName,
};

/// Stored product record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    /// Category resolved by name when the product was last written.
    pub category_id: CategoryId,
    pub description: ProductDescription,
    pub status: EntityStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub category_id: CategoryId,
    pub description: ProductDescription,
}

/// Partial update of a [`Product`]. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<ProductName>,
    pub category_id: Option<CategoryId>,
    pub description: Option<ProductDescription>,
}

impl ProductUpdate {
    /// Returns `true` when no field is staged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category_id.is_none() && self.description.is_none()
    }
}
