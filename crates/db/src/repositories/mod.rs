//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod age_rating_repo;
pub mod movie_repo;

pub use age_rating_repo::AgeRatingRepo;
pub use movie_repo::MovieRepo;

/// Build an `ILIKE` pattern matching `term` anywhere, with wildcards in
/// `term` itself treated literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
