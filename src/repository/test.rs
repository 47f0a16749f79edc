use std::cell::{Cell, RefCell};

use chrono::{DateTime, NaiveDateTime};

use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::{CategoryId, CategoryName, EntityStatus, ProductId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, CategoryWriter, ProductListQuery, ProductReader, ProductWriter,
};

/// Simple in-memory repository used for unit tests.
///
/// Soft-deleted documents are kept in place exactly like the SQLite store.
#[derive(Default)]
pub struct TestRepository {
    categories: RefCell<Vec<Category>>,
    products: RefCell<Vec<Product>>,
    writes: Cell<usize>,
    fail: bool,
}

fn epoch() -> NaiveDateTime {
    DateTime::from_timestamp(0, 0).unwrap().naive_utc()
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories: RefCell::new(categories),
            products: RefCell::new(products),
            ..Default::default()
        }
    }

    /// A repository whose every call fails like an unreachable database.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Number of write calls issued so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.borrow().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.fail {
            Err(RepositoryError::Database(
                diesel::result::Error::BrokenTransactionManager,
            ))
        } else {
            Ok(())
        }
    }

    fn record_write(&self) -> RepositoryResult<()> {
        self.check()?;
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl CategoryReader for TestRepository {
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        self.check()?;
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| &c.id == id && !c.status.is_deleted())
            .cloned())
    }

    fn get_category_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<Category>> {
        self.check()?;
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| &c.name == name && !c.status.is_deleted())
            .cloned())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        self.record_write()?;
        let created = Category {
            id: CategoryId::generate(),
            name: category.name.clone(),
            description: category.description.clone(),
            status: EntityStatus::Active,
            created_at: epoch(),
            updated_at: epoch(),
        };
        self.categories.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_category(
        &self,
        id: &CategoryId,
        update: &CategoryUpdate,
    ) -> RepositoryResult<Option<Category>> {
        self.record_write()?;
        let mut categories = self.categories.borrow_mut();
        let Some(category) = categories
            .iter_mut()
            .find(|c| &c.id == id && !c.status.is_deleted())
        else {
            return Ok(None);
        };
        if let Some(name) = &update.name {
            category.name = name.clone();
        }
        if let Some(description) = &update.description {
            category.description = description.clone();
        }
        Ok(Some(category.clone()))
    }

    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize> {
        self.record_write()?;
        let mut affected = 0;
        for category in self
            .categories
            .borrow_mut()
            .iter_mut()
            .filter(|c| &c.id == id && !c.status.is_deleted())
        {
            category.status = EntityStatus::Deleted;
            affected += 1;
        }
        Ok(affected)
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        self.check()?;
        let mut items: Vec<Product> = self
            .products
            .borrow()
            .iter()
            .filter(|p| !p.status.is_deleted())
            .cloned()
            .collect();
        if let Some(category_id) = query.category_id {
            items.retain(|p| p.category_id == category_id);
        }
        Ok(items)
    }

    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        self.check()?;
        Ok(self
            .products
            .borrow()
            .iter()
            .find(|p| &p.id == id && !p.status.is_deleted())
            .cloned())
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        self.record_write()?;
        let created = Product {
            id: ProductId::generate(),
            name: product.name.clone(),
            category_id: product.category_id.clone(),
            description: product.description.clone(),
            status: EntityStatus::Active,
            created_at: epoch(),
            updated_at: epoch(),
        };
        self.products.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_product(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> RepositoryResult<Option<Product>> {
        self.record_write()?;
        let mut products = self.products.borrow_mut();
        let Some(product) = products
            .iter_mut()
            .find(|p| &p.id == id && !p.status.is_deleted())
        else {
            return Ok(None);
        };
        if let Some(name) = &update.name {
            product.name = name.clone();
        }
        if let Some(category_id) = &update.category_id {
            product.category_id = category_id.clone();
        }
        if let Some(description) = &update.description {
            product.description = description.clone();
        }
        Ok(Some(product.clone()))
    }

    fn delete_product(&self, id: &ProductId) -> RepositoryResult<usize> {
        self.record_write()?;
        let mut affected = 0;
        for product in self
            .products
            .borrow_mut()
            .iter_mut()
            .filter(|p| &p.id == id && !p.status.is_deleted())
        {
            product.status = EntityStatus::Deleted;
            affected += 1;
        }
        Ok(affected)
    }
}
