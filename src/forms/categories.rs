use serde_json::Value;
use validator::Validate;

use crate::domain::category::{CategoryUpdate, NewCategory};
use crate::domain::types::{CategoryDescription, CategoryId, CategoryName};
use crate::forms::{FormError, RequestParts, optional_text, path_id, required_text, target_id};

/// A category body may carry `name` and `description` and nothing else.
const MAX_CATEGORY_FIELDS: usize = 2;

#[derive(Debug, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
}

impl TryFrom<RequestParts> for AddCategoryForm {
    type Error = FormError;

    fn try_from(parts: RequestParts) -> Result<Self, Self::Error> {
        parts.ensure_no_query()?;
        parts.require_body("please provide category data")?;
        if parts.body.len() > MAX_CATEGORY_FIELDS {
            return Err(FormError::UnexpectedFields);
        }

        Ok(Self {
            name: required_text(&parts.body, "name", "Name is required")?,
            description: required_text(&parts.body, "description", "Description is required")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
    pub description: CategoryDescription,
}

impl AddCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name,
            description: self.description,
        }
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = FormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: CategoryDescription::new(value.description)?,
        })
    }
}

impl TryFrom<RequestParts> for AddCategoryFormPayload {
    type Error = FormError;

    fn try_from(parts: RequestParts) -> Result<Self, Self::Error> {
        AddCategoryForm::try_from(parts)?.try_into()
    }
}

/// Query of the category details endpoint.
#[derive(Debug, Validate)]
pub struct CategoryDetailsForm {
    #[validate(length(min = 1))]
    pub category_name: String,
}

impl TryFrom<RequestParts> for CategoryDetailsForm {
    type Error = FormError;

    fn try_from(parts: RequestParts) -> Result<Self, Self::Error> {
        parts.ensure_no_body()?;
        parts.require_query("please provide inputs for getting category details")?;

        Ok(Self {
            category_name: required_text(
                &parts.query,
                "categoryName",
                "please provide categoryName",
            )?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetailsFormPayload {
    pub category_name: CategoryName,
}

impl TryFrom<CategoryDetailsForm> for CategoryDetailsFormPayload {
    type Error = FormError;

    fn try_from(value: CategoryDetailsForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_name: CategoryName::new(value.category_name)?,
        })
    }
}

impl TryFrom<RequestParts> for CategoryDetailsFormPayload {
    type Error = FormError;

    fn try_from(parts: RequestParts) -> Result<Self, Self::Error> {
        CategoryDetailsForm::try_from(parts)?.try_into()
    }
}

/// Update request for one category.
///
/// Body fields are kept as sent. They are only checked through
/// [`Self::staged_update`], once the target category is known to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    pub category_id: CategoryId,
    pub name: Option<Value>,
    pub description: Option<Value>,
}

impl UpdateCategoryFormPayload {
    /// Read the path identifier and the explicitly supplied body fields.
    /// Unknown body keys are ignored.
    pub fn from_request(category_id: String, mut parts: RequestParts) -> Result<Self, FormError> {
        parts.ensure_no_query()?;
        parts.require_body("category details are required for update")?;
        let category_id = target_id(category_id, "categoryId")?;

        Ok(Self {
            category_id: CategoryId::new(category_id)?,
            name: parts.body.remove("name"),
            description: parts.body.remove("description"),
        })
    }

    /// Validate and trim the supplied fields into a partial update.
    pub fn staged_update(&self) -> Result<CategoryUpdate, FormError> {
        Ok(CategoryUpdate {
            name: optional_text(self.name.as_ref(), "name")?
                .map(CategoryName::new)
                .transpose()?,
            description: optional_text(self.description.as_ref(), "description")?
                .map(CategoryDescription::new)
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCategoryFormPayload {
    pub category_id: CategoryId,
}

impl DeleteCategoryFormPayload {
    /// Deletes take neither query parameters nor a body.
    pub fn from_request(category_id: String, parts: RequestParts) -> Result<Self, FormError> {
        parts.ensure_no_query()?;
        parts.ensure_no_body()?;
        let category_id = path_id(category_id, "CategoryID")?;

        Ok(Self {
            category_id: CategoryId::new(category_id)?,
        })
    }
}
