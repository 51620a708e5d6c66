pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::error::AppError;

/// Fallback for paths no route matches.
pub async fn unknown_route() -> AppError {
    AppError::UnknownRoute
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
