//! OpenAPI document generated from the handler annotations.

use axum::routing::get;
use axum::{Json, Router};
use catalog_db::models::age_rating::{AgeRating, AgeRatingInput};
use catalog_db::models::movie::MovieInput;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::{age_ratings, movies};
use crate::representation::{AgeRatingDetail, AgeRatingField, MovieRepresentation};
use crate::routes::health::{self, HealthResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies Catalog API",
        description = "Movies and age ratings. Pass `?include=1` to nest related records."
    ),
    paths(
        health::health_check,
        movies::list_movies,
        movies::create_movie,
        movies::get_movie,
        movies::replace_movie,
        movies::update_movie,
        movies::delete_movie,
        age_ratings::list_age_ratings,
        age_ratings::create_age_rating,
        age_ratings::get_age_rating,
        age_ratings::replace_age_rating,
        age_ratings::update_age_rating,
        age_ratings::delete_age_rating,
    ),
    components(schemas(
        MovieRepresentation,
        AgeRatingField,
        AgeRating,
        AgeRatingDetail,
        MovieInput,
        AgeRatingInput,
        ErrorBody,
        HealthResponse,
    )),
    tags(
        (name = "movies", description = "Movie CRUD"),
        (name = "age-ratings", description = "Age rating CRUD"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// GET /api/schema -- the OpenAPI 3 document as JSON.
async fn schema() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount the schema route (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/api/schema", get(schema))
}
