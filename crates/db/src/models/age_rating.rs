//! Age rating models and DTOs.

use catalog_core::age_rating;
use catalog_core::error::CoreError;
use catalog_core::field_errors::FieldErrors;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `age_ratings` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct AgeRating {
    /// Short symbolic name, also the primary key (e.g. `PG-13`).
    pub name: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Raw age rating payload for `POST`, `PUT` and `PATCH`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AgeRatingInput {
    #[validate(custom(function = "age_rating::validate_name_length"))]
    #[schema(max_length = 10)]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Checked DTO for inserting an age rating.
#[derive(Debug, Clone)]
pub struct CreateAgeRating {
    pub name: String,
    pub description: String,
}

/// Checked DTO for updating an age rating. The name is immutable.
#[derive(Debug, Clone, Default)]
pub struct UpdateAgeRating {
    pub description: Option<String>,
}

/// Query parameters for listing age ratings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AgeRatingFilter {
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
}

impl AgeRatingInput {
    /// The trimmed, non-blank name carried by this payload, if any.
    pub fn name_key(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Validate the payload for insertion.
    ///
    /// `errors` carries problems the caller already found (such as a
    /// duplicate name) so every field is reported in one response.
    pub fn into_create(self, mut errors: FieldErrors) -> Result<CreateAgeRating, CoreError> {
        if let Err(e) = self.validate() {
            errors.merge(e.into());
        }

        let name = match errors.require("name", self.name) {
            Some(raw) => match age_rating::clean_name(&raw) {
                Ok(name) => Some(name),
                Err(msg) => {
                    errors.add("name", msg);
                    None
                }
            },
            None => None,
        };

        errors.into_result()?;
        let name = name.ok_or_else(|| CoreError::Internal("age rating name missing".into()))?;

        Ok(CreateAgeRating {
            name,
            description: self.description.unwrap_or_default(),
        })
    }

    /// Validate the payload as a partial update of the rating named `current`.
    pub fn into_update(self, current: &str) -> Result<UpdateAgeRating, CoreError> {
        let mut errors = FieldErrors::new();
        if let Some(name) = self.name.as_deref() {
            if name.trim() != current {
                errors.add("name", age_rating::MSG_NAME_IMMUTABLE);
            }
        }
        errors.into_result()?;

        Ok(UpdateAgeRating {
            description: self.description,
        })
    }

    /// Validate the payload as a full replacement of the rating named `current`.
    ///
    /// An omitted description resets it to empty.
    pub fn into_replace(self, current: &str) -> Result<UpdateAgeRating, CoreError> {
        let update = self.into_update(current)?;
        Ok(UpdateAgeRating {
            description: Some(update.description.unwrap_or_default()),
        })
    }
}
