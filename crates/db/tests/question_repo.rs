//! Integration tests for the question and category repositories.
//!
//! Runs against a real database seeded by `db/migrations` (categories) and
//! `tests/fixtures/questions.sql` (19 questions, ids 2..=23).

use sqlx::PgPool;
use trivia_db::models::question::CreateQuestion;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

fn new_question(category: &str) -> CreateQuestion {
    CreateQuestion {
        question: "In which city is The Louvre art museum located?".to_string(),
        answer: "Paris".to_string(),
        category: category.to_string(),
        difficulty: 1,
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_categories_are_listed_in_id_order(pool: PgPool) {
    let categories = CategoryRepo::list_all(&pool).await.unwrap();

    let names: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(
        names,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
    assert_eq!(categories[0].id, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_category_is_none(pool: PgPool) {
    assert!(CategoryRepo::find_by_id(&pool, 1000).await.unwrap().is_none());
    assert!(CategoryRepo::find_by_id(&pool, 3).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn list_all_is_ordered_by_id(pool: PgPool) {
    let questions = QuestionRepo::list_all(&pool).await.unwrap();

    assert_eq!(questions.len(), 19);
    assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn create_assigns_next_id(pool: PgPool) {
    let created = QuestionRepo::create(&pool, &new_question("2")).await.unwrap();

    assert_eq!(created.id, 24);
    assert_eq!(created.category, "2");

    let all = QuestionRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.last(), Some(&created));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    assert!(QuestionRepo::delete(&pool, 5).await.unwrap());
    assert!(!QuestionRepo::delete(&pool, 5).await.unwrap());
    let remaining = QuestionRepo::list_all(&pool).await.unwrap();
    assert_eq!(remaining.len(), 18);
    assert!(remaining.iter().all(|q| q.id != 5));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn list_by_category_matches_string_id(pool: PgPool) {
    let art = QuestionRepo::list_by_category(&pool, "2").await.unwrap();
    let ids: Vec<i64> = art.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![17, 18, 19]);

    let none = QuestionRepo::list_by_category(&pool, "1000").await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    let hits = QuestionRepo::search(&pool, "PARIS").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 23);

    // "entitled" contains "title" as well.
    let hits = QuestionRepo::search(&pool, "title").await.unwrap();
    let ids: Vec<i64> = hits.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![5, 6]);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("questions"))]
async fn search_treats_wildcards_literally(pool: PgPool) {
    assert!(QuestionRepo::search(&pool, "%").await.unwrap().is_empty());
    assert!(QuestionRepo::search(&pool, "_").await.unwrap().is_empty());
}
