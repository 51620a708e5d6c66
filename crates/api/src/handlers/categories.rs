//! Handlers for the read-only category endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_db::models::category::to_category_map;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::response::{CategoriesPayload, QuestionListPayload, Success};
use crate::state::AppState;

/// GET /categories
///
/// All categories as an id -> type map. 404 when none exist.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    if categories.is_empty() {
        return Err(CoreError::EmptyResult("categories").into());
    }

    Ok(Json(Success::new(CategoriesPayload {
        categories: to_category_map(categories),
    })))
}

/// GET /categories/{id}/questions
///
/// Every question in one category, unpaginated. A failed filter query is
/// reported as 404, like a missing category.
pub async fn list_category_questions(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })
    };

    CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or_else(not_found)?;

    let questions = QuestionRepo::list_by_category(&state.pool, &category_id.to_string())
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, category_id, "Category filter failed");
            not_found()
        })?;

    Ok(Json(Success::new(QuestionListPayload {
        total_questions: questions.len(),
        questions,
        current_category: Some(category_id),
    })))
}
