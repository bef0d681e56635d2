pub mod age_ratings;
pub mod movies;
