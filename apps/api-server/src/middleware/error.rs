//! Error handling - every failure becomes a 422 with a `{message}` body.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use postboard_core::error::{DomainError, RepoError};
use postboard_shared::ErrorResponse;

/// Application-level error type returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body could not be parsed.
    #[error("{0}")]
    InvalidPayload(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Domain(err.into())
    }
}

impl ResponseError for AppError {
    /// Not-found, validation and store failures all share one status.
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Domain(DomainError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Record not found");
            }
            AppError::Domain(DomainError::Repo(RepoError::Validation(msg))) => {
                tracing::warn!("Validation failed: {}", msg);
            }
            AppError::InvalidPayload(msg) => {
                tracing::warn!("Invalid request payload: {}", msg);
            }
            AppError::Domain(DomainError::Repo(err)) => {
                tracing::error!("Store error: {}", err);
            }
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Route JSON body failures through the same 422 mapping as handler errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidPayload(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
