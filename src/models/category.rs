use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, CategoryUpdate as DomainCategoryUpdate,
    NewCategory as DomainNewCategory,
};
use crate::domain::types::{
    CategoryDescription, CategoryId, CategoryName, EntityStatus, TypeConstraintError,
};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial changeset; `None` columns are left untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Assign a fresh identifier and timestamps to a domain category.
    pub fn from_domain(category: DomainNewCategory, now: NaiveDateTime) -> Self {
        Self {
            id: CategoryId::generate().into_inner(),
            name: category.name.into_inner(),
            description: category.description.into_inner(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CategoryChangeset {
    pub fn from_domain(update: &DomainCategoryUpdate, now: NaiveDateTime) -> Self {
        Self {
            name: update.name.as_ref().map(|n| n.as_str().to_string()),
            description: update.description.as_ref().map(|d| d.as_str().to_string()),
            updated_at: now,
        }
    }
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(category.id)?,
            name: CategoryName::new(category.name)?,
            description: CategoryDescription::new(category.description)?,
            status: EntityStatus::from_deleted_flag(category.is_deleted),
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}
