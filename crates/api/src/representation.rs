//! External JSON representations of catalog records.
//!
//! Rendering is a pure function of the loaded rows and the request's
//! [`ResponseShape`]; handlers pick the loading strategy, this module picks
//! the layout.

use catalog_core::include::ResponseShape;
use catalog_core::types::DbId;
use catalog_db::models::age_rating::AgeRating;
use catalog_db::models::movie::{Movie, MovieWithAgeRating};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// How a movie's age rating is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AgeRatingField {
    /// The rating's name, e.g. `"R"`.
    Reference(String),
    /// The rating's full body.
    Nested(AgeRating),
}

/// A movie as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MovieRepresentation {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration: i32,
    pub age_rating: AgeRatingField,
}

impl MovieRepresentation {
    /// Render a movie with its age rating by reference.
    pub fn flat(movie: Movie) -> Self {
        let age_rating = AgeRatingField::Reference(movie.age_rating.clone());
        Self::with_age_rating(movie, age_rating)
    }

    /// Render a movie with its age rating nested.
    pub fn nested(row: MovieWithAgeRating) -> Self {
        let (movie, rating) = row.into_parts();
        Self::with_age_rating(movie, AgeRatingField::Nested(rating))
    }

    fn with_age_rating(movie: Movie, age_rating: AgeRatingField) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            release_date: movie.release_date,
            duration: movie.duration,
            age_rating,
        }
    }
}

/// A movie as loaded for a given [`ResponseShape`].
///
/// Keeps the loading strategy and the rendering in lockstep: nested
/// rendering is only reachable from a joined row.
#[derive(Debug, Clone)]
pub enum LoadedMovie {
    Plain(Movie),
    Joined(MovieWithAgeRating),
}

impl LoadedMovie {
    pub fn render(self) -> MovieRepresentation {
        match self {
            LoadedMovie::Plain(movie) => MovieRepresentation::flat(movie),
            LoadedMovie::Joined(row) => MovieRepresentation::nested(row),
        }
    }

    /// The shape this value renders as.
    pub fn shape(&self) -> ResponseShape {
        match self {
            LoadedMovie::Plain(_) => ResponseShape::Flat,
            LoadedMovie::Joined(_) => ResponseShape::Nested,
        }
    }
}

/// Detail view of an age rating, including every movie that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AgeRatingDetail {
    pub name: String,
    pub description: String,
    /// Referencing movies, rendered flat.
    pub movies: Vec<MovieRepresentation>,
}

impl AgeRatingDetail {
    pub fn new(rating: AgeRating, movies: Vec<Movie>) -> Self {
        Self {
            name: rating.name,
            description: rating.description,
            movies: movies.into_iter().map(MovieRepresentation::flat).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 15,
            title: "Movie Name".into(),
            description: "Detailed description of the movie".into(),
            release_date: NaiveDate::from_ymd_opt(2025, 9, 26).unwrap(),
            duration: 95,
            age_rating: "R".into(),
        }
    }

    fn joined() -> MovieWithAgeRating {
        MovieWithAgeRating {
            movie: movie(),
            age_rating_description: "Restricted".into(),
        }
    }

    #[test]
    fn flat_movie_renders_rating_by_name() {
        let json = serde_json::to_value(MovieRepresentation::flat(movie())).unwrap();
        assert_eq!(
            json,
            json!({
                "id": 15,
                "title": "Movie Name",
                "description": "Detailed description of the movie",
                "release_date": "2025-09-26",
                "duration": 95,
                "age_rating": "R",
            })
        );
    }

    #[test]
    fn nested_movie_embeds_rating() {
        let json = serde_json::to_value(MovieRepresentation::nested(joined())).unwrap();
        assert_eq!(
            json["age_rating"],
            json!({ "name": "R", "description": "Restricted" })
        );
        assert_eq!(json["release_date"], "2025-09-26");
    }

    #[test]
    fn shapes_differ_only_in_age_rating() {
        let mut flat = serde_json::to_value(MovieRepresentation::flat(movie())).unwrap();
        let mut nested = serde_json::to_value(MovieRepresentation::nested(joined())).unwrap();
        flat.as_object_mut().unwrap().remove("age_rating");
        nested.as_object_mut().unwrap().remove("age_rating");
        assert_eq!(flat, nested);
    }

    #[test]
    fn loaded_movie_reports_its_shape() {
        assert_eq!(LoadedMovie::Plain(movie()).shape(), ResponseShape::Flat);
        assert_eq!(LoadedMovie::Joined(joined()).shape(), ResponseShape::Nested);
        assert_eq!(
            LoadedMovie::Joined(joined()).render().age_rating,
            AgeRatingField::Nested(AgeRating {
                name: "R".into(),
                description: "Restricted".into(),
            })
        );
    }

    #[test]
    fn detail_lists_movies_flat() {
        let rating = AgeRating {
            name: "R".into(),
            description: "Restricted".into(),
        };
        let json = serde_json::to_value(AgeRatingDetail::new(rating, vec![movie()])).unwrap();
        assert_eq!(json["name"], "R");
        assert_eq!(json["movies"][0]["age_rating"], "R");
        assert_eq!(json["movies"][0]["id"], 15);
    }
}
