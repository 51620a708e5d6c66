use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trivia_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error that no handler classified.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No route matches the request path.
    #[error("No route for path")]
    UnknownRoute,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify a failed store operation as unprocessable input.
    pub fn unprocessable(err: sqlx::Error) -> Self {
        tracing::warn!(error = %err, "Store operation failed");
        AppError::Core(CoreError::Unprocessable(err.to_string()))
    }

    /// The HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::EmptyResult(_) => StatusCode::NOT_FOUND,
                CoreError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
                CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            },
            AppError::Database(sqlx::Error::RowNotFound) | AppError::UnknownRoute => {
                StatusCode::NOT_FOUND
            }
            AppError::Database(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// Client-facing message for a status code.
fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message_for(status),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Well-formed JSON with the wrong field types is unprocessable; anything
/// that is not JSON at all is a bad request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Core(CoreError::Unprocessable(err.body_text()))
            }
            other => AppError::Core(CoreError::BadRequest(other.body_text())),
        }
    }
}

/// Path segments that fail to parse do not match any route.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Unmatched path parameter");
        AppError::UnknownRoute
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::BadRequest(rejection.body_text()))
    }
}
