use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::{CategoryId, CategoryName};
use crate::forms::products::{
    AddProductFormPayload, DeleteProductFormPayload, ListProductsFormPayload,
    UpdateProductFormPayload,
};
use crate::repository::{CategoryReader, ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Resolves a category name to the identifier of the oldest active category
/// carrying it.
fn resolve_category<R>(name: &CategoryName, repo: &R) -> ServiceResult<CategoryId>
where
    R: CategoryReader,
{
    match repo.get_category_by_name(name) {
        Ok(Some(category)) => Ok(category.id),
        Ok(None) => Err(ServiceError::NotFound(format!(
            "no category found by this name: {name}"
        ))),
        Err(e) => {
            log::error!("Failed to get category by name: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Creates a product under the category named in the payload.
///
/// Nothing is written when the category cannot be resolved.
pub fn create_product<R>(payload: AddProductFormPayload, repo: &R) -> ServiceResult<Product>
where
    R: CategoryReader + ProductWriter,
{
    let category_id = resolve_category(&payload.category_name, repo)?;

    let product = NewProduct {
        name: payload.name,
        category_id,
        description: payload.description,
    };

    match repo.create_product(&product) {
        Ok(created) => Ok(created),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Lists every active product. An empty catalogue is reported as not found.
pub fn show_products<R>(_payload: ListProductsFormPayload, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    match repo.list_products(ProductListQuery::default()) {
        Ok(products) if products.is_empty() => {
            Err(ServiceError::NotFound("No product found".to_string()))
        }
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Applies the supplied fields to an active product.
///
/// Fields are checked in body order once the product is found, and a new
/// category name must resolve to an active category.
pub fn update_product<R>(payload: UpdateProductFormPayload, repo: &R) -> ServiceResult<Product>
where
    R: CategoryReader + ProductReader + ProductWriter,
{
    let not_found =
        || ServiceError::NotFound(format!("no product found by {}", payload.product_id));

    let existing = match repo.get_product_by_id(&payload.product_id) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(not_found()),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    };

    let name = payload.staged_name()?;
    let category_id = payload
        .staged_category_name()?
        .map(|category_name| resolve_category(&category_name, repo))
        .transpose()?;
    let description = payload.staged_description()?;

    let update = ProductUpdate {
        name,
        category_id,
        description,
    };

    if update.is_empty() {
        return Ok(existing);
    }

    match repo.update_product(&payload.product_id, &update) {
        Ok(Some(updated)) => Ok(updated),
        Ok(None) => Err(not_found()),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

pub fn delete_product<R>(payload: DeleteProductFormPayload, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    let not_found =
        || ServiceError::NotFound(format!("no product found by {}", payload.product_id));

    match repo.get_product_by_id(&payload.product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(not_found()),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    }

    match repo.delete_product(&payload.product_id) {
        Ok(0) => Err(not_found()),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{
        CategoryDescription, EntityStatus, ProductDescription, ProductId, ProductName,
    };
    use crate::repository::test::TestRepository;
    use chrono::DateTime;
    use serde_json::json;

    const SHOES_ID: &str = "65a1b2c3d4e5f60718293a4b";
    const BOOTS_ID: &str = "65a1b2c3d4e5f60718293a4e";
    const PRODUCT_ID: &str = "65a1b2c3d4e5f60718293a4c";

    fn category(id: &str, name: &str, status: EntityStatus) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            description: CategoryDescription::new("Footwear").unwrap(),
            status,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(PRODUCT_ID).unwrap(),
            name: ProductName::new("Sneaker").unwrap(),
            category_id: CategoryId::new(SHOES_ID).unwrap(),
            description: ProductDescription::new("Casual").unwrap(),
            status: EntityStatus::Active,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn add_payload(category_name: &str) -> AddProductFormPayload {
        AddProductFormPayload {
            name: ProductName::new("Sneaker").unwrap(),
            category_name: CategoryName::new(category_name).unwrap(),
            description: ProductDescription::new("Casual").unwrap(),
        }
    }

    fn update_payload() -> UpdateProductFormPayload {
        UpdateProductFormPayload {
            product_id: ProductId::new(PRODUCT_ID).unwrap(),
            name: None,
            category_name: None,
            description: None,
        }
    }

    #[test]
    fn create_resolves_category_id() {
        let repo = TestRepository::new(
            vec![category(SHOES_ID, "Shoes", EntityStatus::Active)],
            vec![],
        );

        let created = create_product(add_payload("Shoes"), &repo).unwrap();

        assert_eq!(created.category_id, SHOES_ID);
        assert_eq!(created.status, EntityStatus::Active);
        assert_eq!(repo.products().len(), 1);
    }

    #[test]
    fn create_with_unknown_category_writes_nothing() {
        let repo = TestRepository::new(
            vec![category(SHOES_ID, "Shoes", EntityStatus::Active)],
            vec![],
        );

        let err = create_product(add_payload("Hats"), &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::NotFound("no category found by this name: Hats".to_string())
        );
        assert!(repo.products().is_empty());
        assert_eq!(repo.writes(), 0);
    }

    #[test]
    fn create_ignores_deleted_categories() {
        let repo = TestRepository::new(
            vec![category(SHOES_ID, "Shoes", EntityStatus::Deleted)],
            vec![],
        );

        let err = create_product(add_payload("Shoes"), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn empty_catalogue_is_not_found() {
        let repo = TestRepository::default();

        let err = show_products(ListProductsFormPayload, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound("No product found".to_string()));
    }

    #[test]
    fn update_moves_product_to_resolved_category() {
        let repo = TestRepository::new(
            vec![
                category(SHOES_ID, "Shoes", EntityStatus::Active),
                category(BOOTS_ID, "Boots", EntityStatus::Active),
            ],
            vec![sample_product()],
        );
        let payload = UpdateProductFormPayload {
            category_name: Some(json!("Boots")),
            ..update_payload()
        };

        let updated = update_product(payload, &repo).unwrap();

        assert_eq!(updated.category_id, BOOTS_ID);
        assert_eq!(updated.name, "Sneaker");
        assert_eq!(updated.description, "Casual");
    }

    #[test]
    fn update_with_unknown_category_is_not_found() {
        let repo = TestRepository::new(vec![], vec![sample_product()]);
        let payload = UpdateProductFormPayload {
            name: Some(json!("Runner")),
            category_name: Some(json!("Hats")),
            ..update_payload()
        };

        let err = update_product(payload, &repo).unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(repo.products()[0].name, "Sneaker");
    }

    #[test]
    fn deleted_product_disappears_from_listing() {
        let repo = TestRepository::new(vec![], vec![sample_product()]);
        let payload = DeleteProductFormPayload {
            product_id: ProductId::new(PRODUCT_ID).unwrap(),
        };

        delete_product(payload.clone(), &repo).unwrap();

        let err = show_products(ListProductsFormPayload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = delete_product(payload, &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound(format!("no product found by {PRODUCT_ID}"))
        );
        let err = update_product(
            UpdateProductFormPayload {
                name: Some(json!("Runner")),
                ..update_payload()
            },
            &repo,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn unknown_product_is_reported_before_field_checks() {
        let repo = TestRepository::default();
        let payload = UpdateProductFormPayload {
            description: Some(json!("")),
            ..update_payload()
        };

        let err = update_product(payload, &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound(format!("no product found by {PRODUCT_ID}"))
        );
    }

    #[test]
    fn fields_are_checked_in_body_order() {
        let repo = TestRepository::new(vec![], vec![sample_product()]);

        let payload = UpdateProductFormPayload {
            name: Some(json!(" ")),
            category_name: Some(json!("Hats")),
            ..update_payload()
        };
        let err = update_product(payload, &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Form("name should be in valid format".to_string())
        );

        let payload = UpdateProductFormPayload {
            category_name: Some(json!("Hats")),
            description: Some(json!("")),
            ..update_payload()
        };
        let err = update_product(payload, &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound("no category found by this name: Hats".to_string())
        );
        assert_eq!(repo.writes(), 0);
    }
}
