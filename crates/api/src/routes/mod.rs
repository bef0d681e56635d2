pub mod age_ratings;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                  list, create
/// /movies/{id}             get, replace, update, delete
///
/// /age-ratings             list, create
/// /age-ratings/{name}      get, replace, update, delete
/// ```
///
/// Every path is also reachable with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(age_ratings::router())
}
