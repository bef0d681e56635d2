//! Repository for the `age_ratings` table.

use sqlx::PgPool;

use crate::models::age_rating::{AgeRating, AgeRatingFilter, CreateAgeRating, UpdateAgeRating};
use crate::repositories::contains_pattern;

/// Column list for `age_ratings` queries.
const COLUMNS: &str = "name, description";

/// Provides data access for age ratings.
pub struct AgeRatingRepo;

impl AgeRatingRepo {
    /// List age ratings ordered by name, optionally narrowed by a search term.
    pub async fn list(
        pool: &PgPool,
        filter: &AgeRatingFilter,
    ) -> Result<Vec<AgeRating>, sqlx::Error> {
        match filter.search.as_deref() {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM age_ratings \
                     WHERE name ILIKE $1 OR description ILIKE $1 \
                     ORDER BY name"
                );
                sqlx::query_as::<_, AgeRating>(&query)
                    .bind(contains_pattern(term))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM age_ratings ORDER BY name");
                sqlx::query_as::<_, AgeRating>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find an age rating by its name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<AgeRating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM age_ratings WHERE name = $1");
        sqlx::query_as::<_, AgeRating>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Whether an age rating with this name exists.
    pub async fn exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM age_ratings WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Insert a new age rating.
    pub async fn create(pool: &PgPool, dto: &CreateAgeRating) -> Result<AgeRating, sqlx::Error> {
        let query = format!(
            "INSERT INTO age_ratings (name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AgeRating>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .fetch_one(pool)
            .await
    }

    /// Update an age rating's description.
    ///
    /// Uses `COALESCE` so an absent description is left unchanged. Returns
    /// `None` if no rating has this name.
    pub async fn update(
        pool: &PgPool,
        name: &str,
        dto: &UpdateAgeRating,
    ) -> Result<Option<AgeRating>, sqlx::Error> {
        let query = format!(
            "UPDATE age_ratings SET \
                 description = COALESCE($2, description) \
             WHERE name = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AgeRating>(&query)
            .bind(name)
            .bind(&dto.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an age rating by name.
    ///
    /// Returns `true` if a row was removed. Fails with a foreign key
    /// violation while movies still reference the rating.
    pub async fn delete(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM age_ratings WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
