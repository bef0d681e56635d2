//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO as received over HTTP
//! - Checked create / update DTOs produced from the input once it validates

pub mod age_rating;
pub mod movie;
