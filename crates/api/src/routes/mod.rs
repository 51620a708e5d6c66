pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                    list categories
/// /categories/{id}/questions     questions in one category
///
/// /questions                     list (paginated), create
/// /questions/{id}                delete
/// /questions/search              search by question text
///
/// /quizzes                       next quiz question
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}
