use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    ProductUpdate as DomainProductUpdate,
};
use crate::domain::types::{
    CategoryId, EntityStatus, ProductDescription, ProductId, ProductName, TypeConstraintError,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    pub fn from_domain(product: DomainNewProduct, now: NaiveDateTime) -> Self {
        Self {
            id: ProductId::generate().into_inner(),
            name: product.name.into_inner(),
            category_id: product.category_id.into_inner(),
            description: product.description.into_inner(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ProductChangeset {
    pub fn from_domain(update: &DomainProductUpdate, now: NaiveDateTime) -> Self {
        Self {
            name: update.name.as_ref().map(|n| n.as_str().to_string()),
            category_id: update.category_id.as_ref().map(|c| c.as_str().to_string()),
            description: update.description.as_ref().map(|d| d.as_str().to_string()),
            updated_at: now,
        }
    }
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: ProductName::new(product.name)?,
            category_id: CategoryId::new(product.category_id)?,
            description: ProductDescription::new(product.description)?,
            status: EntityStatus::from_deleted_flag(product.is_deleted),
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}
