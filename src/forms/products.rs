use serde_json::Value;
use validator::Validate;

use crate::domain::types::{CategoryName, ProductDescription, ProductId, ProductName};
use crate::forms::{FormError, RequestParts, optional_text, path_id, required_text, target_id};

#[derive(Debug, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category_name: String,
    #[validate(length(min = 1))]
    pub description: String,
}

impl TryFrom<RequestParts> for AddProductForm {
    type Error = FormError;

    /// Extra body keys are accepted and dropped.
    fn try_from(parts: RequestParts) -> Result<Self, Self::Error> {
        parts.ensure_no_query()?;
        parts.require_body("please provide input data")?;

        Ok(Self {
            name: required_text(&parts.body, "name", "Name must be provided")?,
            category_name: required_text(
                &parts.body,
                "categoryName",
                "category name must be provided",
            )?,
            description: required_text(
                &parts.body,
                "description",
                "description must be provided",
            )?,
        })
    }
}

/// A product to create, still referencing its category by name.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProductFormPayload {
    pub name: ProductName,
    pub category_name: CategoryName,
    pub description: ProductDescription,
}

impl TryFrom<AddProductForm> for AddProductFormPayload {
    type Error = FormError;

    fn try_from(value: AddProductForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: ProductName::new(value.name)?,
            category_name: CategoryName::new(value.category_name)?,
            description: ProductDescription::new(value.description)?,
        })
    }
}

impl TryFrom<RequestParts> for AddProductFormPayload {
    type Error = FormError;

    fn try_from(parts: RequestParts) -> Result<Self, Self::Error> {
        AddProductForm::try_from(parts)?.try_into()
    }
}

/// The product listing accepts neither a body nor query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ListProductsFormPayload;

impl TryFrom<RequestParts> for ListProductsFormPayload {
    type Error = FormError;

    fn try_from(parts: RequestParts) -> Result<Self, Self::Error> {
        parts.ensure_no_body()?;
        parts.ensure_no_query()?;
        Ok(Self)
    }
}

/// Update request for one product. Body fields are kept as sent and checked
/// one by one once the product is known to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductFormPayload {
    pub product_id: ProductId,
    pub name: Option<Value>,
    pub category_name: Option<Value>,
    pub description: Option<Value>,
}

impl UpdateProductFormPayload {
    pub fn from_request(product_id: String, mut parts: RequestParts) -> Result<Self, FormError> {
        parts.ensure_no_query()?;
        parts.require_body("product details are required for update")?;
        let product_id = target_id(product_id, "productId")?;

        Ok(Self {
            product_id: ProductId::new(product_id)?,
            name: parts.body.remove("name"),
            category_name: parts.body.remove("categoryName"),
            description: parts.body.remove("description"),
        })
    }

    pub fn staged_name(&self) -> Result<Option<ProductName>, FormError> {
        Ok(optional_text(self.name.as_ref(), "name")?
            .map(ProductName::new)
            .transpose()?)
    }

    /// The new category, still referenced by name.
    pub fn staged_category_name(&self) -> Result<Option<CategoryName>, FormError> {
        Ok(optional_text(self.category_name.as_ref(), "categoryName")?
            .map(CategoryName::new)
            .transpose()?)
    }

    pub fn staged_description(&self) -> Result<Option<ProductDescription>, FormError> {
        Ok(optional_text(self.description.as_ref(), "description")?
            .map(ProductDescription::new)
            .transpose()?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteProductFormPayload {
    pub product_id: ProductId,
}

impl DeleteProductFormPayload {
    pub fn from_request(product_id: String, parts: RequestParts) -> Result<Self, FormError> {
        parts.ensure_no_query()?;
        parts.ensure_no_body()?;
        let product_id = path_id(product_id, "ProductID")?;

        Ok(Self {
            product_id: ProductId::new(product_id)?,
        })
    }
}
