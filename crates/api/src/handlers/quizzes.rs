//! Handler for quiz play.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::quiz::select_question;
use trivia_db::models::question::QuizRequest;
use trivia_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::{QuizPayload, QuizQuestion, Success};
use crate::state::AppState;

/// POST /quizzes
///
/// Serve a random question from the chosen category (or all categories for
/// id 0) that is not in `previous_questions`. Once the client has seen as
/// many questions as the category holds, `question` is `""`. Always 200.
pub async fn next_quiz_question(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let category = &input.quiz_category.id;
    let candidates = if category.is_all() {
        QuestionRepo::list_all(&state.pool).await?
    } else {
        QuestionRepo::list_by_category(&state.pool, &category.as_stored()).await?
    };

    let next = {
        let mut rng = rand::rng();
        select_question(&candidates, &input.previous_questions, &mut rng).cloned()
    };

    match &next {
        Some(question) => tracing::debug!(question_id = question.id, "Quiz question served"),
        None => tracing::debug!(
            candidates = candidates.len(),
            previous = input.previous_questions.len(),
            "Quiz exhausted"
        ),
    }

    Ok(Json(Success::new(QuizPayload {
        question: QuizQuestion::from(next),
    })))
}
