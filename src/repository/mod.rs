use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::{CategoryId, CategoryName, ProductId};

pub mod category;
pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// Every lookup only sees documents whose `is_deleted` flag is unset. The
/// underlying `r2d2::Pool` is cheap to clone, allowing the repository to be
/// passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict to products pointing at this category.
    pub category_id: Option<CategoryId>,
}

impl ProductListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve an active category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve the oldest active category with exactly this name.
    fn get_category_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored record.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Apply a partial update to an active category.
    ///
    /// Returns `None` when no active category matched.
    fn update_category(
        &self,
        id: &CategoryId,
        update: &CategoryUpdate,
    ) -> RepositoryResult<Option<Category>>;
    /// Soft-delete an active category, returning the number of affected rows.
    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List active products matching the supplied query parameters.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve an active product by its identifier.
    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return the stored record.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Apply a partial update to an active product.
    fn update_product(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> RepositoryResult<Option<Product>>;
    /// Soft-delete an active product, returning the number of affected rows.
    fn delete_product(&self, id: &ProductId) -> RepositoryResult<usize>;
}
