//! Route definitions for movies.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes, registered with and without a trailing slash.
///
/// ```text
/// GET    /movies        -> list_movies
/// POST   /movies        -> create_movie
/// GET    /movies/{id}   -> get_movie
/// PUT    /movies/{id}   -> replace_movie
/// PATCH  /movies/{id}   -> update_movie
/// DELETE /movies/{id}   -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", collection())
        .route("/movies/", collection())
        .route("/movies/{id}", item())
        .route("/movies/{id}/", item())
}

fn collection() -> MethodRouter<AppState> {
    get(movies::list_movies).post(movies::create_movie)
}

fn item() -> MethodRouter<AppState> {
    get(movies::get_movie)
        .put(movies::replace_movie)
        .patch(movies::update_movie)
        .delete(movies::delete_movie)
}
