//! Handlers for the `/age-ratings` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::age_rating::{still_referenced_message, MSG_DUPLICATE_NAME};
use catalog_core::error::CoreError;
use catalog_core::field_errors::FieldErrors;
use catalog_db::models::age_rating::{AgeRating, AgeRatingFilter, AgeRatingInput};
use catalog_db::repositories::{AgeRatingRepo, MovieRepo};
use catalog_db::DbPool;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{JsonBody, PathParam};
use crate::query::QueryParams;
use crate::representation::AgeRatingDetail;
use crate::state::AppState;

fn age_rating_not_found(name: &str) -> AppError {
    AppError::Core(CoreError::not_found("AgeRating", name))
}

/// Fail with 404 unless an age rating with this name exists.
async fn ensure_age_rating_exists(pool: &DbPool, name: &str) -> AppResult<()> {
    if AgeRatingRepo::exists(pool, name).await? {
        Ok(())
    } else {
        Err(age_rating_not_found(name))
    }
}

/// List age ratings, ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/age-ratings",
    tag = "age-ratings",
    params(AgeRatingFilter),
    responses(
        (status = 200, description = "Age ratings ordered by name", body = [AgeRating]),
    )
)]
pub async fn list_age_ratings(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<AgeRatingFilter>,
) -> AppResult<impl IntoResponse> {
    let ratings = AgeRatingRepo::list(&state.pool, &filter).await?;
    tracing::debug!(count = ratings.len(), "Listed age ratings");
    Ok(Json(ratings))
}

/// Create an age rating.
#[utoipa::path(
    post,
    path = "/api/v1/age-ratings",
    tag = "age-ratings",
    request_body = AgeRatingInput,
    responses(
        (status = 201, description = "Age rating created", body = AgeRating),
        (status = 400, description = "Missing, invalid or duplicate name", body = ErrorBody),
    )
)]
pub async fn create_age_rating(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<AgeRatingInput>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    if let Some(name) = input.name_key() {
        if AgeRatingRepo::exists(&state.pool, name).await? {
            errors.add("name", MSG_DUPLICATE_NAME);
        }
    }
    let dto = input.into_create(errors)?;

    let rating = AgeRatingRepo::create(&state.pool, &dto).await?;
    tracing::info!(age_rating = %rating.name, "Age rating created");

    Ok((StatusCode::CREATED, Json(rating)))
}

/// Retrieve an age rating together with the movies that reference it.
#[utoipa::path(
    get,
    path = "/api/v1/age-ratings/{name}",
    tag = "age-ratings",
    params(("name" = String, Path, description = "Age rating name")),
    responses(
        (status = 200, description = "The age rating and its movies", body = AgeRatingDetail),
        (status = 404, description = "No age rating with this name", body = ErrorBody),
    )
)]
pub async fn get_age_rating(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let rating = AgeRatingRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| age_rating_not_found(&name))?;
    let movies = MovieRepo::list_by_age_rating(&state.pool, &rating.name).await?;

    Ok(Json(AgeRatingDetail::new(rating, movies)))
}

/// Replace an age rating's description. An omitted description clears it.
#[utoipa::path(
    put,
    path = "/api/v1/age-ratings/{name}",
    tag = "age-ratings",
    params(("name" = String, Path, description = "Age rating name")),
    request_body = AgeRatingInput,
    responses(
        (status = 200, description = "Age rating replaced", body = AgeRating),
        (status = 400, description = "Attempted rename", body = ErrorBody),
        (status = 404, description = "No age rating with this name", body = ErrorBody),
    )
)]
pub async fn replace_age_rating(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
    JsonBody(input): JsonBody<AgeRatingInput>,
) -> AppResult<impl IntoResponse> {
    ensure_age_rating_exists(&state.pool, &name).await?;
    let dto = input.into_replace(&name)?;
    let rating = AgeRatingRepo::update(&state.pool, &name, &dto)
        .await?
        .ok_or_else(|| age_rating_not_found(&name))?;

    tracing::info!(age_rating = %rating.name, "Age rating replaced");
    Ok(Json(rating))
}

/// Change an age rating's description when one is provided.
#[utoipa::path(
    patch,
    path = "/api/v1/age-ratings/{name}",
    tag = "age-ratings",
    params(("name" = String, Path, description = "Age rating name")),
    request_body = AgeRatingInput,
    responses(
        (status = 200, description = "Age rating updated", body = AgeRating),
        (status = 400, description = "Attempted rename", body = ErrorBody),
        (status = 404, description = "No age rating with this name", body = ErrorBody),
    )
)]
pub async fn update_age_rating(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
    JsonBody(input): JsonBody<AgeRatingInput>,
) -> AppResult<impl IntoResponse> {
    ensure_age_rating_exists(&state.pool, &name).await?;
    let dto = input.into_update(&name)?;
    let rating = AgeRatingRepo::update(&state.pool, &name, &dto)
        .await?
        .ok_or_else(|| age_rating_not_found(&name))?;

    tracing::info!(age_rating = %rating.name, "Age rating updated");
    Ok(Json(rating))
}

/// Delete an age rating no movie references.
#[utoipa::path(
    delete,
    path = "/api/v1/age-ratings/{name}",
    tag = "age-ratings",
    params(("name" = String, Path, description = "Age rating name")),
    responses(
        (status = 204, description = "Age rating deleted"),
        (status = 404, description = "No age rating with this name", body = ErrorBody),
        (status = 409, description = "Movies still reference this age rating", body = ErrorBody),
    )
)]
pub async fn delete_age_rating(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let movie_count = MovieRepo::count_by_age_rating(&state.pool, &name).await?;
    if movie_count > 0 {
        return Err(AppError::Core(CoreError::Conflict(still_referenced_message(
            &name,
            movie_count,
        ))));
    }

    if !AgeRatingRepo::delete(&state.pool, &name).await? {
        return Err(age_rating_not_found(&name));
    }

    tracing::info!(age_rating = %name, "Age rating deleted");
    Ok(StatusCode::NO_CONTENT)
}
