use chrono::Utc;
use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table
            .filter(products::is_deleted.eq(false))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_id) = &query.category_id {
            items = items.filter(products::category_id.eq(category_id.as_str().to_string()));
        }

        let items = items
            .order((products::created_at.asc(), products::id.asc()))
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.as_str()))
            .filter(products::is_deleted.eq(false))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product = DbNewProduct::from_domain(product.clone(), Utc::now().naive_utc());

        let created = diesel::insert_into(products::table)
            .values(db_product)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_product(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changeset = ProductChangeset::from_domain(update, Utc::now().naive_utc());

        let updated = diesel::update(
            products::table
                .filter(products::id.eq(id.as_str()))
                .filter(products::is_deleted.eq(false)),
        )
        .set(changeset)
        .get_result::<DbProduct>(&mut conn)
        .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_product(&self, id: &ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            products::table
                .filter(products::id.eq(id.as_str()))
                .filter(products::is_deleted.eq(false)),
        )
        .set((
            products::is_deleted.eq(true),
            products::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }
}
