//! HTTP-level integration tests for the `/api/v1/age-ratings` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json, seed_age_rating, seed_movie};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_age_rating_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/age-ratings/",
        json!({"name": "PG-13", "description": "Parents strongly cautioned"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"name": "PG-13", "description": "Parents strongly cautioned"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_age_rating_requires_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/age-ratings", json!({"description": "x"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["name"][0], "This field is required.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_age_rating_rejects_long_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/age-ratings", json!({"name": "ABCDEFGHIJK"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["fields"]["name"][0],
        "Ensure this field has no more than 10 characters."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_age_rating_measures_name_after_trimming(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/age-ratings", json!({"name": "R          "})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "R");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_age_rating_is_reported_under_name(pool: PgPool) {
    seed_age_rating(&pool, "R", "Restricted").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/age-ratings", json!({"name": "R"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["fields"]["name"][0],
        "age rating with this name already exists."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_age_ratings_is_ordered_by_name(pool: PgPool) {
    seed_age_rating(&pool, "R", "Restricted").await;
    seed_age_rating(&pool, "G", "General audiences").await;
    seed_age_rating(&pool, "PG", "Parental guidance").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/age-ratings").await).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["G", "PG", "R"]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/age-ratings?search=guid").await).await;
    assert_eq!(json, json!([{"name": "PG", "description": "Parental guidance"}]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_age_rating_includes_its_movies(pool: PgPool) {
    seed_age_rating(&pool, "R", "Restricted").await;
    seed_age_rating(&pool, "G", "General audiences").await;
    let alien = seed_movie(&pool, "Alien", "R").await;
    seed_movie(&pool, "Babe", "G").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/age-ratings/R/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "R");
    assert_eq!(json["description"], "Restricted");
    let movies = json["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["id"], alien);
    assert_eq!(movies[0]["age_rating"], "R");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_age_rating_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/age-ratings/NOPE").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_age_rating_updates_description(pool: PgPool) {
    seed_age_rating(&pool, "R", "Restricted").await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/age-ratings/R",
        json!({"description": "Under 17 requires accompanying parent"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["description"],
        "Under 17 requires accompanying parent"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_age_rating_without_description_clears_it(pool: PgPool) {
    seed_age_rating(&pool, "R", "Restricted").await;

    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/age-ratings/R/", json!({"name": "R"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"name": "R", "description": ""})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn renaming_an_age_rating_is_rejected(pool: PgPool) {
    seed_age_rating(&pool, "R", "Restricted").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, "/api/v1/age-ratings/R", json!({"name": "X"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["name"].is_array());

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/age-ratings/R").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_age_rating_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/v1/age-ratings/NOPE", json!({"description": "x"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn writes_to_nonexistent_age_rating_return_404_before_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/v1/age-ratings/NOPE", json!({"name": "OTHER"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/v1/age-ratings/NOPE/", json!({"name": "OTHER"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unreferenced_age_rating_returns_204(pool: PgPool) {
    seed_age_rating(&pool, "G", "General audiences").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/age-ratings/G").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/age-ratings/G").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_referenced_age_rating_returns_409_and_keeps_it(pool: PgPool) {
    seed_age_rating(&pool, "R", "Restricted").await;
    seed_movie(&pool, "Alien", "R").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/age-ratings/R/").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["error"],
        "Cannot delete age rating 'R': it is referenced by 1 movie(s)"
    );

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/age-ratings/R").await;
    assert_eq!(response.status(), StatusCode::OK);
}
