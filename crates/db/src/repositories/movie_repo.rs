//! Repository for the `movies` table.
//!
//! Read queries come in two strategies: plain (`movies` only, the rating is
//! carried by name) and joined (`age_ratings` fetched in the same round
//! trip). Callers pick the joined variants when they render ratings nested.

use catalog_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use catalog_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::models::movie::{CreateMovie, Movie, MovieFilter, MovieWithAgeRating, UpdateMovie};
use crate::repositories::contains_pattern;

/// Column list for `movies` queries aliased as `m`.
const COLUMNS: &str = "m.id, m.title, m.description, m.release_date, m.duration, m.age_rating";

/// Column list for `RETURNING` clauses (no alias available).
const RETURNING_COLUMNS: &str = "id, title, description, release_date, duration, age_rating";

/// `FROM` clause for the joined strategy.
const JOINED_FROM: &str = "movies m JOIN age_ratings ar ON ar.name = m.age_rating";

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// List movies matching `filter`, ordered by id, without touching `age_ratings`.
    pub async fn list(pool: &PgPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let (where_clause, next_idx) = filter_clause(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM movies m {where_clause} \
             ORDER BY m.id \
             LIMIT ${next_idx} OFFSET ${offset_idx}",
            offset_idx = next_idx + 1,
        );
        let q = bind_filter(sqlx::query_as::<_, Movie>(&query), filter);
        bind_page(q, filter).fetch_all(pool).await
    }

    /// List movies matching `filter` with their age ratings joined in one query.
    pub async fn list_with_age_rating(
        pool: &PgPool,
        filter: &MovieFilter,
    ) -> Result<Vec<MovieWithAgeRating>, sqlx::Error> {
        let (where_clause, next_idx) = filter_clause(filter);
        let query = format!(
            "SELECT {COLUMNS}, ar.description AS age_rating_description \
             FROM {JOINED_FROM} {where_clause} \
             ORDER BY m.id \
             LIMIT ${next_idx} OFFSET ${offset_idx}",
            offset_idx = next_idx + 1,
        );
        let q = bind_filter(sqlx::query_as::<_, MovieWithAgeRating>(&query), filter);
        bind_page(q, filter).fetch_all(pool).await
    }

    /// All movies referencing the named age rating, ordered by id.
    pub async fn list_by_age_rating(
        pool: &PgPool,
        age_rating: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies m WHERE m.age_rating = $1 ORDER BY m.id");
        sqlx::query_as::<_, Movie>(&query)
            .bind(age_rating)
            .fetch_all(pool)
            .await
    }

    /// Number of movies referencing the named age rating.
    pub async fn count_by_age_rating(pool: &PgPool, age_rating: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE age_rating = $1")
            .bind(age_rating)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies m WHERE m.id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by ID with its age rating joined in one query.
    pub async fn find_with_age_rating(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithAgeRating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, ar.description AS age_rating_description \
             FROM {JOINED_FROM} WHERE m.id = $1"
        );
        sqlx::query_as::<_, MovieWithAgeRating>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a new movie.
    pub async fn create(pool: &PgPool, dto: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, description, release_date, duration, age_rating) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.release_date)
            .bind(dto.duration)
            .bind(&dto.age_rating)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every writable column of a movie.
    ///
    /// Returns `None` if no movie has this ID.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        dto: &CreateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title = $2, \
                 description = $3, \
                 release_date = $4, \
                 duration = $5, \
                 age_rating = $6 \
             WHERE id = $1 \
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.release_date)
            .bind(dto.duration)
            .bind(&dto.age_rating)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a movie.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if no movie has this ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 release_date = COALESCE($4, release_date), \
                 duration = COALESCE($5, duration), \
                 age_rating = COALESCE($6, age_rating) \
             WHERE id = $1 \
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.release_date)
            .bind(dto.duration)
            .bind(&dto.age_rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Dynamic filter helpers
// ---------------------------------------------------------------------------

/// Build the `WHERE` clause for `filter`, returning it together with the
/// next free bind index.
fn filter_clause(filter: &MovieFilter) -> (String, u32) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.search.is_some() {
        conditions.push(format!(
            "(m.title ILIKE ${bind_idx} OR m.description ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
    }
    if filter.title.is_some() {
        conditions.push(format!("m.title = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.release_date.is_some() {
        conditions.push(format!("m.release_date = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.age_rating.is_some() {
        conditions.push(format!("m.age_rating = ${bind_idx}"));
        bind_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_clause, bind_idx)
}

/// Bind the `filter` values in the same order [`filter_clause`] numbered them.
fn bind_filter<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &MovieFilter,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    if let Some(ref term) = filter.search {
        q = q.bind(contains_pattern(term));
    }
    if let Some(ref title) = filter.title {
        q = q.bind(title.clone());
    }
    if let Some(release_date) = filter.release_date {
        q = q.bind(release_date);
    }
    if let Some(ref age_rating) = filter.age_rating {
        q = q.bind(age_rating.clone());
    }
    q
}

fn bind_page<'q, O>(
    q: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &MovieFilter,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    q.bind(clamp_limit(filter.limit, DEFAULT_LIMIT, MAX_LIMIT))
        .bind(clamp_offset(filter.offset))
}
