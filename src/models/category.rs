//! Category request/response models
//!
//! Models for the /api/v1/categories endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::categories;
use crate::error::{FieldErrors, ServiceError};

/// Upper bound on a category name, in characters, after trimming
pub const NAME_MAX_LENGTH: usize = 255;

/// Write-side payload for create and update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "enabled is required"))]
    pub enabled: Option<bool>,
}

/// Input that has passed validation, with the name trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCategory {
    pub name: String,
    pub enabled: bool,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: Some(name.into()),
            enabled: Some(enabled),
        }
    }

    /// Run the field rules and return the validated values.
    ///
    /// The name is trimmed before its length is checked, so surrounding
    /// whitespace never counts against the limit. An empty or
    /// whitespace-only name is rejected as blank.
    pub fn check(&self) -> Result<ValidCategory, ServiceError> {
        let mut fields = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(errors),
        };

        let name = self.name.as_deref().map(str::trim);
        if let Some(name) = name {
            if name.is_empty() {
                fields.add("name", "name must not be blank");
            } else if name.chars().count() > NAME_MAX_LENGTH {
                fields.add(
                    "name",
                    format!("name must be at most {} characters", NAME_MAX_LENGTH),
                );
            }
        }

        match (name, self.enabled) {
            (Some(name), Some(enabled)) if fields.is_empty() => Ok(ValidCategory {
                name: name.to_string(),
                enabled,
            }),
            _ => Err(ServiceError::invalid_fields(fields)),
        }
    }
}

/// Read-side projection of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailOutput {
    pub id: Uuid,
    pub name: String,
    pub enabled: bool,
}

impl From<categories::Model> for CategoryDetailOutput {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            enabled: model.enabled,
        }
    }
}
