//! Domain rules for the movies catalog.
//!
//! Framework-free building blocks shared by the database and HTTP layers:
//! error taxonomy, per-field validation messages, `include` flag parsing
//! and pagination clamping.

pub mod age_rating;
pub mod error;
pub mod field_errors;
pub mod include;
pub mod movie;
pub mod pagination;
pub mod types;
