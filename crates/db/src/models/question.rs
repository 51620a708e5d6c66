use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::category::CategoryKey;
use trivia_core::error::CoreError;
use trivia_core::quiz::QuizCandidate;
use trivia_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    /// String form of the owning category's id.
    pub category: String,
    pub difficulty: i32,
}

impl QuizCandidate for Question {
    fn candidate_id(&self) -> DbId {
        self.id
    }
}

/// Validated insert payload.
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body of `POST /questions`. Every field is required, but presence is
/// checked after parsing so a missing field is reported as unprocessable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<CategoryKey>,
}

impl NewQuestionRequest {
    /// Check that all four fields are present and non-null.
    pub fn validate(self) -> Result<CreateQuestion, CoreError> {
        let missing: Vec<&str> = [
            ("question", self.question.is_none()),
            ("answer", self.answer.is_none()),
            ("difficulty", self.difficulty.is_none()),
            ("category", self.category.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                Ok(CreateQuestion {
                    question,
                    answer,
                    category: category.as_stored(),
                    difficulty,
                })
            }
            _ => Err(CoreError::Unprocessable(format!(
                "missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// The `quiz_category` object of a quiz request. Clients also send a
/// display `type`, which is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: CategoryKey,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    #[serde(default)]
    pub quiz_category: QuizCategory,
}
