//! Handlers for the `/movies` resource.
//!
//! Every endpoint honors `?include=`: the request's [`Shape`] selects both
//! the query strategy (plain or joined with `age_ratings`) and the rendering
//! (rating by name or nested).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::field_errors::FieldErrors;
use catalog_core::include::ResponseShape;
use catalog_core::movie::unknown_age_rating_message;
use catalog_core::types::DbId;
use catalog_db::models::movie::{Movie, MovieFilter, MovieInput};
use catalog_db::repositories::{AgeRatingRepo, MovieRepo};
use catalog_db::DbPool;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{JsonBody, PathParam};
use crate::query::{IncludeParams, QueryParams, Shape};
use crate::representation::{LoadedMovie, MovieRepresentation};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn movie_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("Movie", id))
}

/// Load one movie using the query strategy that matches `shape`.
async fn load_movie(pool: &DbPool, id: DbId, shape: ResponseShape) -> AppResult<LoadedMovie> {
    let loaded = match shape {
        ResponseShape::Flat => MovieRepo::find_by_id(pool, id)
            .await?
            .map(LoadedMovie::Plain),
        ResponseShape::Nested => MovieRepo::find_with_age_rating(pool, id)
            .await?
            .map(LoadedMovie::Joined),
    };
    loaded.ok_or_else(|| movie_not_found(id))
}

/// Load a page of movies using the query strategy that matches `shape`.
async fn load_movies(
    pool: &DbPool,
    filter: &MovieFilter,
    shape: ResponseShape,
) -> AppResult<Vec<LoadedMovie>> {
    let loaded = match shape {
        ResponseShape::Flat => MovieRepo::list(pool, filter)
            .await?
            .into_iter()
            .map(LoadedMovie::Plain)
            .collect(),
        ResponseShape::Nested => MovieRepo::list_with_age_rating(pool, filter)
            .await?
            .into_iter()
            .map(LoadedMovie::Joined)
            .collect(),
    };
    Ok(loaded)
}

/// Render a freshly written row in the requested shape.
///
/// A flat response reuses the `RETURNING` row; a nested one reloads it with
/// its rating joined.
async fn render_written(
    pool: &DbPool,
    movie: Movie,
    shape: ResponseShape,
) -> AppResult<MovieRepresentation> {
    match shape {
        ResponseShape::Flat => Ok(MovieRepresentation::flat(movie)),
        ResponseShape::Nested => Ok(load_movie(pool, movie.id, shape).await?.render()),
    }
}

/// Fail with 404 unless a movie with this id exists.
async fn ensure_movie_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    match MovieRepo::find_by_id(pool, id).await? {
        Some(_) => Ok(()),
        None => Err(movie_not_found(id)),
    }
}

/// Record an `age_rating` error when the payload references a missing rating.
async fn check_age_rating(pool: &DbPool, input: &MovieInput) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Some(name) = input.age_rating_key() {
        if !AgeRatingRepo::exists(pool, name).await? {
            errors.add("age_rating", unknown_age_rating_message(name));
        }
    }
    Ok(errors)
}

// ---------------------------------------------------------------------------
// GET /movies
// ---------------------------------------------------------------------------

/// List movies, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    tag = "movies",
    params(IncludeParams, MovieFilter),
    responses(
        (status = 200, description = "Movies ordered by id", body = [MovieRepresentation]),
        (status = 400, description = "Malformed query parameters", body = ErrorBody),
    )
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Shape(shape): Shape,
    QueryParams(filter): QueryParams<MovieFilter>,
) -> AppResult<impl IntoResponse> {
    let movies: Vec<MovieRepresentation> = load_movies(&state.pool, &filter, shape)
        .await?
        .into_iter()
        .map(LoadedMovie::render)
        .collect();

    tracing::debug!(count = movies.len(), ?shape, "Listed movies");
    Ok(Json(movies))
}

// ---------------------------------------------------------------------------
// POST /movies
// ---------------------------------------------------------------------------

/// Create a movie referencing an existing age rating.
#[utoipa::path(
    post,
    path = "/api/v1/movies",
    tag = "movies",
    params(IncludeParams),
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created", body = MovieRepresentation),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Shape(shape): Shape,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<impl IntoResponse> {
    let errors = check_age_rating(&state.pool, &input).await?;
    let dto = input.into_create(errors)?;

    let movie = MovieRepo::create(&state.pool, &dto).await?;
    tracing::info!(
        movie_id = movie.id,
        title = %movie.title,
        age_rating = %movie.age_rating,
        "Movie created",
    );

    let body = render_written(&state.pool, movie, shape).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

// ---------------------------------------------------------------------------
// GET /movies/{id}
// ---------------------------------------------------------------------------

/// Retrieve a single movie.
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id"), IncludeParams),
    responses(
        (status = 200, description = "The movie", body = MovieRepresentation),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Shape(shape): Shape,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let loaded = load_movie(&state.pool, id, shape).await?;
    tracing::debug!(movie_id = id, shape = ?loaded.shape(), "Loaded movie");
    Ok(Json(loaded.render()))
}

// ---------------------------------------------------------------------------
// PUT /movies/{id}
// ---------------------------------------------------------------------------

/// Replace every writable field of a movie.
#[utoipa::path(
    put,
    path = "/api/v1/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id"), IncludeParams),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie replaced", body = MovieRepresentation),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn replace_movie(
    State(state): State<AppState>,
    Shape(shape): Shape,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<impl IntoResponse> {
    ensure_movie_exists(&state.pool, id).await?;
    let errors = check_age_rating(&state.pool, &input).await?;
    let dto = input.into_create(errors)?;

    let movie = MovieRepo::replace(&state.pool, id, &dto)
        .await?
        .ok_or_else(|| movie_not_found(id))?;
    tracing::info!(movie_id = id, "Movie replaced");

    Ok(Json(render_written(&state.pool, movie, shape).await?))
}

// ---------------------------------------------------------------------------
// PATCH /movies/{id}
// ---------------------------------------------------------------------------

/// Change only the provided fields of a movie.
#[utoipa::path(
    patch,
    path = "/api/v1/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id"), IncludeParams),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie updated", body = MovieRepresentation),
        (status = 400, description = "Invalid fields", body = ErrorBody),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Shape(shape): Shape,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<impl IntoResponse> {
    ensure_movie_exists(&state.pool, id).await?;
    let errors = check_age_rating(&state.pool, &input).await?;
    let dto = input.into_update(errors)?;

    let movie = MovieRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or_else(|| movie_not_found(id))?;
    tracing::info!(movie_id = id, "Movie updated");

    Ok(Json(render_written(&state.pool, movie, shape).await?))
}

// ---------------------------------------------------------------------------
// DELETE /movies/{id}
// ---------------------------------------------------------------------------

/// Delete a movie.
#[utoipa::path(
    delete,
    path = "/api/v1/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(movie_not_found(id));
    }

    tracing::info!(movie_id = id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
