//! Handlers for listing, creating, deleting and searching questions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::paginate;
use trivia_core::search::require_term;
use trivia_core::types::DbId;
use trivia_db::models::category::to_category_map;
use trivia_db::models::question::{NewQuestionRequest, Question, SearchRequest};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};
use trivia_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery, PageParams};
use crate::response::{
    CreatedPayload, DeletedPayload, QuestionListPayload, QuestionPagePayload, Success,
};
use crate::state::AppState;

/// GET /questions?page=N
///
/// One page of questions plus the unpaginated total and the category map.
/// An empty page is a 404.
pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let all = QuestionRepo::list_all(&state.pool).await?;
    let page = paginate(&all, params.page());
    if page.is_empty() {
        return Err(CoreError::EmptyResult("questions").into());
    }
    let questions = page.to_vec();

    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(Success::new(QuestionPagePayload {
        total_questions: all.len(),
        categories: to_category_map(categories),
        questions,
    })))
}

/// DELETE /questions/{id}?page=N
///
/// Every failure here, including an id that does not exist, is reported
/// as 422.
pub async fn delete_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuestionRepo::delete(&state.pool, question_id)
        .await
        .map_err(AppError::unprocessable)?;
    if !deleted {
        return Err(CoreError::Unprocessable(format!(
            "question {question_id} does not exist"
        ))
        .into());
    }

    tracing::info!(question_id, "Question deleted");

    let (questions, total_questions) = current_page(&state.pool, params.page()).await?;

    Ok(Json(Success::new(DeletedPayload {
        deleted: question_id,
        questions,
        total_questions,
    })))
}

/// POST /questions?page=N
///
/// Insert a question. `question`, `answer`, `difficulty` and `category`
/// are all required; anything missing is a 422.
pub async fn create_question(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiJson(input): ApiJson<NewQuestionRequest>,
) -> AppResult<impl IntoResponse> {
    let input = input.validate()?;

    let question = QuestionRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::unprocessable)?;

    tracing::info!(question_id = question.id, category = %question.category, "Question created");

    let (questions, total_questions) = current_page(&state.pool, params.page()).await?;

    Ok(Json(Success::new(CreatedPayload {
        created: question.id,
        questions,
        total_questions,
    })))
}

/// POST /questions/search
///
/// Case-insensitive substring match on question text, unpaginated. Any
/// body that cannot be read as a search request is a 422, including
/// malformed JSON.
pub async fn search_questions(
    State(state): State<AppState>,
    body: Result<ApiJson<SearchRequest>, AppError>,
) -> AppResult<impl IntoResponse> {
    let ApiJson(input) = body.map_err(|err| CoreError::Unprocessable(err.to_string()))?;
    let term = require_term(input.search_term.as_deref())?;

    let questions = QuestionRepo::search(&state.pool, term)
        .await
        .map_err(AppError::unprocessable)?;

    Ok(Json(Success::new(QuestionListPayload {
        total_questions: questions.len(),
        questions,
        current_category: None,
    })))
}

/// Re-read the ordered list after a mutation and slice out `page`.
async fn current_page(pool: &DbPool, page: i64) -> AppResult<(Vec<Question>, usize)> {
    let all = QuestionRepo::list_all(pool)
        .await
        .map_err(AppError::unprocessable)?;
    Ok((paginate(&all, page).to_vec(), all.len()))
}
