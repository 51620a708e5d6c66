//! Shared response envelope types for API handlers.
//!
//! Every successful response carries `"success": true` next to its payload
//! fields. Use [`Success`] instead of ad-hoc `json!` bodies.

use serde::{Serialize, Serializer};
use trivia_core::types::DbId;
use trivia_db::models::category::CategoryMap;
use trivia_db::models::question::Question;

/// `{ "success": true, ...payload }` envelope.
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
}

/// A page of the full question list.
#[derive(Debug, Serialize)]
pub struct QuestionPagePayload {
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub questions: Vec<Question>,
}

/// Unpaginated search or category results.
#[derive(Debug, Serialize)]
pub struct QuestionListPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// `null` for search results.
    pub current_category: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct DeletedPayload {
    pub deleted: DbId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedPayload {
    pub created: DbId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct QuizPayload {
    pub question: QuizQuestion,
}

/// The next quiz question, or the exhausted marker.
#[derive(Debug)]
pub enum QuizQuestion {
    Next(Question),
    /// Serialized as an empty string.
    Exhausted,
}

impl From<Option<Question>> for QuizQuestion {
    fn from(question: Option<Question>) -> Self {
        question.map_or(QuizQuestion::Exhausted, QuizQuestion::Next)
    }
}

impl Serialize for QuizQuestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuizQuestion::Next(question) => question.serialize(serializer),
            QuizQuestion::Exhausted => serializer.serialize_str(""),
        }
    }
}
