use crate::domain::category::Category;
use crate::dto::categories::CategoryDetailsDto;
use crate::dto::products::ProductDto;
use crate::forms::categories::{
    AddCategoryFormPayload, CategoryDetailsFormPayload, DeleteCategoryFormPayload,
    UpdateCategoryFormPayload,
};
use crate::repository::{CategoryReader, CategoryWriter, ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

pub fn create_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category();
    match repo.create_category(&category) {
        Ok(created) => Ok(created),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Looks up an active category by exact name and gathers its active products.
pub fn show_category_details<R>(
    payload: CategoryDetailsFormPayload,
    repo: &R,
) -> ServiceResult<CategoryDetailsDto>
where
    R: CategoryReader + ProductReader,
{
    let category = match repo.get_category_by_name(&payload.category_name) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound("Invalid CategoryName".to_string())),
        Err(e) => {
            log::error!("Failed to get category by name: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    };

    let query = ProductListQuery::default().category(category.id);
    let products = match repo.list_products(query) {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list products for category: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    };

    Ok(CategoryDetailsDto {
        name: category.name.into_inner(),
        description: category.description.into_inner(),
        products: products.into_iter().map(ProductDto::from).collect(),
    })
}

/// Applies the supplied fields to an active category.
///
/// Fields are only checked once the category is found. A payload without
/// supplied fields returns the stored record untouched.
pub fn update_category<R>(payload: UpdateCategoryFormPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let not_found =
        || ServiceError::NotFound(format!("no category found by {}", payload.category_id));

    let existing = match repo.get_category_by_id(&payload.category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(not_found()),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    };

    let update = payload.staged_update()?;
    if update.is_empty() {
        return Ok(existing);
    }

    match repo.update_category(&payload.category_id, &update) {
        Ok(Some(updated)) => Ok(updated),
        Ok(None) => Err(not_found()),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Soft-deletes an active category. Products pointing at it are left as they are.
pub fn delete_category<R>(payload: DeleteCategoryFormPayload, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let not_found =
        || ServiceError::NotFound(format!("no category found by {}", payload.category_id));

    match repo.get_category_by_id(&payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(not_found()),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    }

    match repo.delete_category(&payload.category_id) {
        Ok(0) => Err(not_found()),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}
