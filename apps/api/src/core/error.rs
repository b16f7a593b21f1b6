use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use galaxy_types::MessageResponse;
use thiserror::Error;
use tracing::error;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Maps a unique-constraint violation to a 400 carrying `message`.
    ///
    /// Handlers look up duplicates before inserting, but two concurrent
    /// requests can both pass the lookup; the constraint catches the loser.
    pub fn from_insert(err: sqlx::Error, message: &str) -> Self {
        if is_unique_violation(&err) {
            Self::bad_request(message)
        } else {
            Self::Database(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Router fallback so unknown routes answer with the JSON error body.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Resource not found.")
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) | Self::NotFound(message) => message,
            Self::Database(err) => {
                error!(?err, "database request failed");
                "Database error, try again later.".to_string()
            }
        };
        (status, Json(MessageResponse { message })).into_response()
    }
}

/// Presence check for a required body field.
pub fn require<T>(value: Option<T>, message: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::bad_request(message))
}

/// Presence check for the `email` query parameter; an empty value counts as missing.
pub fn require_email(email: Option<String>) -> ApiResult<String> {
    email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ApiError::bad_request("The user's email is required."))
}
