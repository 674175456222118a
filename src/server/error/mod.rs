//! Error types for the server application.
//!
//! Domain errors (missing records, configuration problems) and external library errors are
//! aggregated into a single [`Error`] type. Every variant implements `IntoResponse`, so
//! handlers return `Result<_, Error>` and propagate failures with `?`.

pub mod config;
pub mod not_found;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{config::ConfigError, not_found::NotFoundError},
};

/// Main error type for the server application.
///
/// Uses `thiserror`'s `#[from]` attribute so underlying errors convert via the `?` operator.
///
/// # Error Categories
/// - Missing records and favorites (404 with an endpoint-specific body)
/// - Generic API errors carrying their own status code and message
/// - Configuration errors (invalid environment variables)
/// - External library errors (database, socket binding)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A requested record or favorite does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Application error surfaced verbatim with its status code.
    #[error("{status}: {message}")]
    ApiError { status: StatusCode, message: String },
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::ApiError`] with the given status and message
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing records or favorites
/// - The carried status - For [`Error::ApiError`], body `{"message": ...}`
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(err) => err.into_response(),
            Self::ApiError { status, message } => {
                tracing::debug!(status = %status, "{}", message);

                (status, Json(MessageDto::new(message))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details such as SQL or constraint names.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
