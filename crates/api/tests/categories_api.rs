//! HTTP-level integration tests for the category endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error_body, body_json, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn lists_seeded_categories_as_map(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "success": true,
            "categories": {
                "1": "Science",
                "2": "Art",
                "3": "Geography",
                "4": "History",
                "5": "Entertainment",
                "6": "Sports",
            },
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_categories_is_404(pool: PgPool) {
    sqlx::query("DELETE FROM categories")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    assert_error_body(get(app, "/categories").await, 404, "resource not found").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn category_questions_are_filtered_and_unpaginated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/2/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_questions"], 3);
    assert_eq!(json["current_category"], 2);
    let ids: Vec<i64> = json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![17, 18, 19]);
    assert!(json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["category"] == "2"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_without_questions_is_empty_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/6/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 0);
    assert_eq!(json["questions"], json!([]));
    assert_eq!(json["current_category"], 6);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn unknown_category_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    assert_error_body(
        get(app, "/categories/1000/questions").await,
        404,
        "resource not found",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_category_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    assert_error_body(
        get(app, "/categories/science/questions").await,
        404,
        "resource not found",
    )
    .await;
}
