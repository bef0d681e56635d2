//! Route definitions for age ratings.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::age_ratings;
use crate::state::AppState;

/// Age rating routes, registered with and without a trailing slash.
///
/// ```text
/// GET    /age-ratings          -> list_age_ratings
/// POST   /age-ratings          -> create_age_rating
/// GET    /age-ratings/{name}   -> get_age_rating
/// PUT    /age-ratings/{name}   -> replace_age_rating
/// PATCH  /age-ratings/{name}   -> update_age_rating
/// DELETE /age-ratings/{name}   -> delete_age_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/age-ratings", collection())
        .route("/age-ratings/", collection())
        .route("/age-ratings/{name}", item())
        .route("/age-ratings/{name}/", item())
}

fn collection() -> MethodRouter<AppState> {
    get(age_ratings::list_age_ratings).post(age_ratings::create_age_rating)
}

fn item() -> MethodRouter<AppState> {
    get(age_ratings::get_age_rating)
        .put(age_ratings::replace_age_rating)
        .patch(age_ratings::update_age_rating)
        .delete(age_ratings::delete_age_rating)
}
