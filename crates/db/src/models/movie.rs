//! Movie models and DTOs.

use catalog_core::error::CoreError;
use catalog_core::field_errors::FieldErrors;
use catalog_core::movie;
use catalog_core::types::DbId;
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::age_rating::AgeRating;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration: i32,
    /// Name of the referenced age rating.
    pub age_rating: String,
}

/// A `movies` row joined with its age rating in the same query.
#[derive(Debug, Clone, FromRow)]
pub struct MovieWithAgeRating {
    #[sqlx(flatten)]
    pub movie: Movie,
    pub age_rating_description: String,
}

impl MovieWithAgeRating {
    /// Split the joined row into the movie and its rating.
    pub fn into_parts(self) -> (Movie, AgeRating) {
        let rating = AgeRating {
            name: self.movie.age_rating.clone(),
            description: self.age_rating_description,
        };
        (self.movie, rating)
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Raw movie payload for `POST`, `PUT` and `PATCH`.
///
/// Every field is optional at this level so that missing and malformed
/// fields can be reported together instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct MovieInput {
    #[validate(custom(function = "movie::validate_title_length"))]
    #[schema(max_length = 255)]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Release date as `YYYY-MM-DD`.
    #[schema(format = Date)]
    pub release_date: Option<String>,
    /// Running time in minutes.
    #[schema(minimum = 1)]
    pub duration: Option<i32>,
    /// Name of an existing age rating.
    pub age_rating: Option<String>,
}

/// Checked DTO for inserting (or fully replacing) a movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub age_rating: String,
}

/// Checked DTO for partially updating a movie. `None` leaves a column as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub age_rating: Option<String>,
}

/// Query parameters for listing movies.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieFilter {
    /// Case-insensitive substring matched against title and description.
    pub search: Option<String>,
    /// Exact title match.
    pub title: Option<String>,
    /// Exact release date match (`YYYY-MM-DD`).
    pub release_date: Option<NaiveDate>,
    /// Exact age rating name match.
    pub age_rating: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl MovieInput {
    /// The trimmed, non-blank age rating reference carried by this payload.
    pub fn age_rating_key(&self) -> Option<&str> {
        self.age_rating
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Validate the payload for insertion or full replacement.
    ///
    /// `errors` carries problems the caller already found (an unresolved
    /// `age_rating`) so every field is reported in one response.
    pub fn into_create(self, mut errors: FieldErrors) -> Result<CreateMovie, CoreError> {
        errors.require("title", self.title.as_ref());
        errors.require("release_date", self.release_date.as_ref());
        errors.require("duration", self.duration);
        errors.require("age_rating", self.age_rating.as_ref());

        let checked = self.check(errors)?;
        match checked {
            UpdateMovie {
                title: Some(title),
                description,
                release_date: Some(release_date),
                duration: Some(duration),
                age_rating: Some(age_rating),
            } => Ok(CreateMovie {
                title,
                description: description.unwrap_or_default(),
                release_date,
                duration,
                age_rating,
            }),
            _ => Err(CoreError::Internal(
                "movie payload incomplete after validation".into(),
            )),
        }
    }

    /// Validate the payload as a partial update; only present fields are checked.
    pub fn into_update(self, errors: FieldErrors) -> Result<UpdateMovie, CoreError> {
        self.check(errors)
    }

    fn check(self, mut errors: FieldErrors) -> Result<UpdateMovie, CoreError> {
        if let Err(e) = self.validate() {
            errors.merge(e.into());
        }

        let title = self.title.and_then(|raw| match movie::clean_title(&raw) {
            Ok(title) => Some(title),
            Err(msg) => {
                errors.add("title", msg);
                None
            }
        });
        let release_date = self
            .release_date
            .and_then(|raw| match movie::parse_release_date(&raw) {
                Ok(date) => Some(date),
                Err(msg) => {
                    errors.add("release_date", msg);
                    None
                }
            });
        let duration = self
            .duration
            .and_then(|raw| match movie::check_duration(raw) {
                Ok(duration) => Some(duration),
                Err(msg) => {
                    errors.add("duration", msg);
                    None
                }
            });
        let age_rating = self.age_rating.and_then(|raw| {
            let name = raw.trim();
            if name.is_empty() {
                errors.add("age_rating", movie::MSG_BLANK);
                None
            } else {
                Some(name.to_string())
            }
        });

        errors.into_result()?;

        Ok(UpdateMovie {
            title,
            description: self.description,
            release_date,
            duration,
            age_rating,
        })
    }
}
