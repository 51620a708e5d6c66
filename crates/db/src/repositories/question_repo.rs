//! Repository for the `questions` table.
//!
//! Listing queries always order by id so paging is stable between requests.

use sqlx::PgPool;
use trivia_core::search::contains_pattern;
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides CRUD and filtered reads for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question and return the stored row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {QUESTION_COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// List every question ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List the questions whose stored category equals `category`.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE category = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive literal substring search over question text.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE question ILIKE $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
